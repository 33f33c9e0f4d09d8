//! Realtime channel wire format.
//!
//! Each event travels as a JSON object with a `type` tag; inbound events are
//! delivered to the store as tagged messages, in arrival order, with no
//! reordering across event types.

use serde::{Deserialize, Serialize};

use crate::domain::Message;

/// Events pushed by the server over the realtime channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// Full snapshot of currently-online user ids
    UsersOnline { user_ids: Vec<String> },
    /// Full snapshot of (user id, activity) pairs
    Activities { activities: Vec<(String, String)> },
    /// A single user came online
    UserConnected { user_id: String },
    /// A single user went offline
    UserDisconnected { user_id: String },
    /// A message addressed to this client
    ReceiveMessage { message: Message },
    /// Echo of a message this client sent
    MessageSent { message: Message },
    /// A single user changed their activity
    ActivityUpdated { user_id: String, activity: String },
}

/// Events emitted by the client over the realtime channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    /// Presence announcement sent right after connecting
    UserConnected { user_id: String },
    /// Send a direct message; the server echoes it back as `message_sent`
    SendMessage {
        receiver_id: String,
        sender_id: String,
        content: String,
    },
}
