//! Interactive chat client over the realtime channel.
//!
//! Connects to the chat server, announces presence, and mirrors server pushes
//! into a local state store. Typed lines are sent as direct messages to the
//! selected conversation partner.
//!
//! Commands:
//! - `/users` refreshes and prints the roster
//! - `/to <user-id>` selects a conversation partner and loads the history
//! - anything else is sent to the selected partner
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hibiki-client -- --user-id alice
//! cargo run --bin hibiki-client -- -c bob -u ws://127.0.0.1:8080/ws
//! ```

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use hibiki_client::{
    api::HttpChatApi,
    domain::User,
    dto::ServerEvent,
    formatter::MessageFormatter,
    store::ChatStore,
    transport::WebSocketTransport,
};
use hibiki_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Chat client with presence and direct messages", long_about = None)]
struct Args {
    /// User ID to connect as (must be unique)
    #[arg(short = 'c', long)]
    user_id: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// HTTP API base URL
    #[arg(short = 'a', long, default_value = "http://127.0.0.1:8080/api")]
    api_url: String,
}

/// Redisplay the prompt after printing asynchronous output
fn redisplay_prompt(user_id: &str) {
    print!("{}> ", user_id);
    std::io::stdout().flush().ok();
}

/// Print the roster from the current store state
fn print_roster(store: &ChatStore, user_id: &str) {
    let state = store.state();
    let formatted = MessageFormatter::format_roster(
        &state.users,
        &state.online_users,
        &state.user_activities,
        user_id,
    );
    print!("{}", formatted);
}

/// Look up a roster entry by id or by name
fn find_user(store: &ChatStore, key: &str) -> Option<User> {
    store
        .state()
        .users
        .iter()
        .find(|u| u.id == key || u.name == key)
        .cloned()
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let user_id = args.user_id.clone();

    // Wire the store with the real transport and API client
    let transport = Arc::new(WebSocketTransport::new(args.url.clone()));
    let api = Arc::new(HttpChatApi::new(args.api_url.clone()));
    let mut store = ChatStore::new(transport, api);

    // The event stream must be taken before the loop so the select below can
    // poll it while the store is borrowed inside the arm bodies
    let mut events = match store.subscribe_events().await {
        Some(events) => events,
        None => {
            tracing::error!("Event stream unavailable");
            std::process::exit(1);
        }
    };

    if let Err(e) = store.init_socket(&user_id).await {
        tracing::error!("Failed to connect: {}", e);
        std::process::exit(1);
    }

    store.fetch_users().await;
    if let Some(message) = &store.state().error {
        print!("{}", MessageFormatter::format_fetch_error(message));
    }

    println!(
        "\nYou are '{}'. Use /to <user-id> to pick a partner, then type to chat. Press Ctrl+C to exit.",
        user_id
    );
    print_roster(&store, &user_id);

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_user_id = user_id.clone();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", prompt_user_id);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    tracing::info!("Event stream closed");
                    break;
                };
                handle_event(&mut store, event, &user_id);
                redisplay_prompt(&user_id);
            }
            line = input_rx.recv() => {
                let Some(line) = line else {
                    // Readline thread exited (Ctrl+C / Ctrl+D)
                    break;
                };
                handle_input(&mut store, &line, &user_id).await;
            }
        }
    }

    if let Err(e) = store.disconnect_socket().await {
        tracing::warn!("Failed to disconnect cleanly: {}", e);
    }
}

/// Apply one inbound event and print its notification
fn handle_event(store: &mut ChatStore, event: ServerEvent, user_id: &str) {
    store.apply_event(event.clone());

    match event {
        ServerEvent::UserConnected { user_id: id } if id != user_id => {
            print!("{}", MessageFormatter::format_user_online(&id));
        }
        ServerEvent::UserDisconnected { user_id: id } => {
            print!("{}", MessageFormatter::format_user_offline(&id));
        }
        ServerEvent::ActivityUpdated { user_id: id, activity } => {
            print!("{}", MessageFormatter::format_activity_updated(&id, &activity));
        }
        ServerEvent::ReceiveMessage { message } => {
            print!(
                "{}",
                MessageFormatter::format_chat_message(
                    &message.sender_id,
                    &message.content,
                    message.timestamp,
                )
            );
        }
        ServerEvent::MessageSent { message } => {
            print!("\n{}", MessageFormatter::format_sent_confirmation(message.timestamp));
        }
        _ => {}
    }
}

/// Handle one line of user input
async fn handle_input(store: &mut ChatStore, line: &str, user_id: &str) {
    if line == "/users" {
        store.fetch_users().await;
        match &store.state().error {
            Some(message) => print!("{}", MessageFormatter::format_fetch_error(message)),
            None => print_roster(store, user_id),
        }
        return;
    }

    if let Some(key) = line.strip_prefix("/to ") {
        let key = key.trim();
        match find_user(store, key) {
            Some(user) => {
                store.fetch_messages(&user.id).await;
                if let Some(message) = &store.state().error {
                    print!("{}", MessageFormatter::format_fetch_error(message));
                    return;
                }

                for message in &store.state().messages {
                    print!(
                        "{}",
                        MessageFormatter::format_chat_message(
                            &message.sender_id,
                            &message.content,
                            message.timestamp,
                        )
                    );
                }
                println!("\nNow chatting with '{}'.", user.name);
                store.set_selected_user(Some(user));
            }
            None => {
                println!("No user '{}' in the roster. Try /users first.", key);
            }
        }
        return;
    }

    let Some(receiver) = store.state().selected_user.clone() else {
        println!("No partner selected. Use /to <user-id> first.");
        return;
    };

    if let Err(e) = store.send_message(&receiver.id, user_id, line).await {
        tracing::warn!("Failed to send message: {}", e);
    }
}
