//! Wire-format DTOs for the realtime channel and the HTTP API.

pub mod http;
pub mod websocket;

pub use websocket::{ClientEvent, ServerEvent};
