//! Domain models shared by the store, the transport and the HTTP API.

use serde::{Deserialize, Serialize};

/// A chat participant from the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier (assigned by the external backend)
    pub id: String,
    /// Display name
    pub name: String,
}

/// A direct message between two users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message identifier (assigned by the external backend)
    pub id: String,
    /// Sender user identifier
    pub sender_id: String,
    /// Receiver user identifier
    pub receiver_id: String,
    /// Message body
    pub content: String,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}
