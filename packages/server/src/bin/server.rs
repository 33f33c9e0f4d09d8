//! Statistics server for the hibiki music-library application.
//!
//! Serves aggregate counts (songs, albums, users, distinct artists) over HTTP.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hibiki-server
//! cargo run --bin hibiki-server -- --host 0.0.0.0 --port 3000 --catalog catalog.json
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tokio::sync::Mutex;

use hibiki_server::{
    domain::Catalog,
    infrastructure::{catalog_loader::load_catalog, repository::InMemoryCatalogRepository},
    ui::Server,
    usecase::GetStatsUseCase,
};
use hibiki_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hibiki-server")]
#[command(about = "Statistics server for the hibiki music library", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Path to a JSON catalog file to seed the in-memory store
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Catalog (seeded from file, or empty)
    // 2. Repository
    // 3. UseCase
    // 4. Server

    // 1. Load the catalog
    let catalog = match &args.catalog {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded catalog from {}: {} songs, {} albums, {} users",
                    path.display(),
                    catalog.songs.len(),
                    catalog.albums.len(),
                    catalog.users.len()
                );
                catalog
            }
            Err(e) => {
                tracing::error!("Failed to load catalog from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No catalog file given, starting with an empty catalog");
            Catalog::default()
        }
    };

    // 2. Create Repository (in-memory store)
    let repository = Arc::new(InMemoryCatalogRepository::new(Arc::new(Mutex::new(catalog))));

    // 3. Create UseCase
    let get_stats_usecase = Arc::new(GetStatsUseCase::new(repository));

    // 4. Create and run the server
    let server = Server::new(get_stats_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
