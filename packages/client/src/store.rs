//! Chat state store.
//!
//! Holds the local snapshot of chat-relevant state (roster, presence,
//! activities, messages, connection flag) and keeps it synchronized through
//! two on-demand HTTP fetches and the realtime channel. Inbound events are
//! tagged messages applied by [`ChatStore::apply_event`], a single-consumer
//! reducer; delivery order equals arrival order on the transport.
//!
//! The transport and the HTTP API are injected at construction (no
//! module-level singletons), so tests substitute both.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    api::ChatApi,
    domain::{Message, User},
    dto::{ClientEvent, ServerEvent},
    error::ClientError,
    transport::SocketTransport,
};

/// Local snapshot of chat state, lifetime = application session
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// Roster, replaced wholesale on fetch
    pub users: Vec<User>,
    /// Currently-online user ids
    pub online_users: HashSet<String>,
    /// Free-text activity per user id
    pub user_activities: HashMap<String, String>,
    /// Message list; append-only within a session, replaced wholesale on
    /// fetch-by-peer
    pub messages: Vec<Message>,
    /// Conversation partner selected by the UI layer, if any
    pub selected_user: Option<User>,
    /// True only between a successful connect and an explicit disconnect
    pub is_connected: bool,
    /// True while an HTTP fetch is in flight
    pub is_loading: bool,
    /// Last HTTP failure message, for UI display
    pub error: Option<String>,
}

/// Chat client store wrapping the realtime transport and the HTTP API
pub struct ChatStore {
    state: ChatState,
    transport: Arc<dyn SocketTransport>,
    api: Arc<dyn ChatApi>,
    /// Tracks listener registration separately from `is_connected`, so a
    /// reconnect never registers the event stream twice
    handlers_attached: bool,
}

impl ChatStore {
    /// Create a new store around an injected transport and API client
    pub fn new(transport: Arc<dyn SocketTransport>, api: Arc<dyn ChatApi>) -> Self {
        Self {
            state: ChatState::default(),
            transport,
            api,
            handlers_attached: false,
        }
    }

    /// Read access to the current state snapshot
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Open the realtime connection and announce presence.
    ///
    /// Idempotent: a no-op while already connected, so the `user_connected`
    /// announcement is emitted exactly once per connect cycle.
    pub async fn init_socket(&mut self, user_id: &str) -> Result<(), ClientError> {
        if self.state.is_connected {
            tracing::debug!("init_socket ignored: already connected");
            return Ok(());
        }

        self.transport.connect(user_id).await?;
        self.transport
            .emit(ClientEvent::UserConnected {
                user_id: user_id.to_string(),
            })
            .await?;

        self.state.is_connected = true;
        Ok(())
    }

    /// Take the inbound event stream from the transport.
    ///
    /// Returns `Some` on the first call only; the stream stays attached
    /// across disconnect/reconnect cycles.
    pub async fn subscribe_events(&mut self) -> Option<mpsc::UnboundedReceiver<ServerEvent>> {
        if self.handlers_attached {
            return None;
        }
        let stream = self.transport.take_event_stream().await;
        if stream.is_some() {
            self.handlers_attached = true;
        }
        stream
    }

    /// Close the realtime connection. No-op while already disconnected.
    pub async fn disconnect_socket(&mut self) -> Result<(), ClientError> {
        if !self.state.is_connected {
            tracing::debug!("disconnect_socket ignored: not connected");
            return Ok(());
        }

        self.transport.disconnect().await?;
        self.state.is_connected = false;
        Ok(())
    }

    /// Apply one inbound event to the state. Pure state update, no derived
    /// computation.
    pub fn apply_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::UsersOnline { user_ids } => {
                self.state.online_users = user_ids.into_iter().collect();
            }
            ServerEvent::Activities { activities } => {
                self.state.user_activities = activities.into_iter().collect();
            }
            ServerEvent::UserConnected { user_id } => {
                self.state.online_users.insert(user_id);
            }
            ServerEvent::UserDisconnected { user_id } => {
                self.state.online_users.remove(&user_id);
            }
            ServerEvent::ReceiveMessage { message } => {
                self.state.messages.push(message);
            }
            ServerEvent::MessageSent { message } => {
                self.state.messages.push(message);
            }
            ServerEvent::ActivityUpdated { user_id, activity } => {
                self.state.user_activities.insert(user_id, activity);
            }
        }
    }

    /// Fetch the roster, replacing `users` wholesale on success.
    ///
    /// On failure the server-provided message is recorded in `error` and
    /// `users` is left untouched. The loading flag is cleared on completion
    /// regardless of outcome.
    pub async fn fetch_users(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;

        match self.api.fetch_users().await {
            Ok(users) => self.state.users = users,
            Err(e) => self.state.error = Some(e.to_string()),
        }

        self.state.is_loading = false;
    }

    /// Fetch the message history with one conversation partner, replacing
    /// `messages` wholesale on success. Same loading/error discipline as
    /// [`ChatStore::fetch_users`].
    pub async fn fetch_messages(&mut self, peer_id: &str) {
        self.state.is_loading = true;
        self.state.error = None;

        match self.api.fetch_messages(peer_id).await {
            Ok(messages) => self.state.messages = messages,
            Err(e) => self.state.error = Some(e.to_string()),
        }

        self.state.is_loading = false;
    }

    /// Emit a `send_message` event.
    ///
    /// A no-op (not an error) when no connection is open. The message is not
    /// appended locally; the echoed `message_sent` event updates state.
    pub async fn send_message(
        &self,
        receiver_id: &str,
        sender_id: &str,
        content: &str,
    ) -> Result<(), ClientError> {
        if !self.transport.is_open() {
            tracing::debug!("send_message ignored: no open connection");
            return Ok(());
        }

        self.transport
            .emit(ClientEvent::SendMessage {
                receiver_id: receiver_id.to_string(),
                sender_id: sender_id.to_string(),
                content: content.to_string(),
            })
            .await
    }

    /// Select the conversation partner (or clear the selection)
    pub fn set_selected_user(&mut self, user: Option<User>) {
        self.state.selected_user = user;
    }
}
