//! Error types for the hibiki chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Opening the realtime connection failed
    #[error("Connection error: {0}")]
    ConnectionFailed(String),

    /// An emission was attempted without an open connection
    #[error("No open connection")]
    NotConnected,

    /// An HTTP request failed; carries the server-provided message
    #[error("{0}")]
    RequestFailed(String),

    /// A payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}
