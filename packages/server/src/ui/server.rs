//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::GetStatsUseCase;

use super::{
    handler::{get_stats, health_check},
    signal::shutdown_signal,
    state::AppState,
};

/// Statistics HTTP server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(get_stats_usecase);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// GetStatsUseCase（統計取得のユースケース）
    get_stats_usecase: Arc<GetStatsUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `get_stats_usecase` - UseCase for computing library statistics
    pub fn new(get_stats_usecase: Arc<GetStatsUseCase>) -> Self {
        Self { get_stats_usecase }
    }

    /// Build the router with all HTTP endpoints.
    ///
    /// Exposed separately from [`Server::run`] so integration tests can
    /// serve the router on an ephemeral port.
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            get_stats_usecase: self.get_stats_usecase,
        });

        Router::new()
            .route("/api/health", get(health_check))
            .route("/api/stats", get(get_stats))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the statistics server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Statistics server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Stats endpoint: http://{}/api/stats", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
