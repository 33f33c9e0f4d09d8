//! Realtime transport seam.
//!
//! The store owns an injected connection manager instead of a module-level
//! singleton socket; the trait below is that seam. The transport object is
//! constructed once at application start and reused across
//! connect/disconnect cycles.

pub mod websocket;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::{
    dto::{ClientEvent, ServerEvent},
    error::ClientError,
};

pub use websocket::WebSocketTransport;

/// Connection manager interface the store depends on
#[async_trait]
pub trait SocketTransport: Send + Sync {
    /// Open the connection, attaching the user id as authentication context
    async fn connect(&self, user_id: &str) -> Result<(), ClientError>;

    /// Close the connection; the transport object stays usable for a later
    /// reconnect
    async fn disconnect(&self) -> Result<(), ClientError>;

    /// Emit an outbound event
    async fn emit(&self, event: ClientEvent) -> Result<(), ClientError>;

    /// Whether a connection is currently open
    fn is_open(&self) -> bool;

    /// Hand out the single inbound event stream.
    ///
    /// Returns `Some` exactly once; subsequent calls return `None`. The
    /// stream survives disconnect/reconnect cycles, so listeners are never
    /// registered twice.
    async fn take_event_stream(&self) -> Option<mpsc::UnboundedReceiver<ServerEvent>>;
}
