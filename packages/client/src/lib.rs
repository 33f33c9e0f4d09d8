//! Chat client library for the hibiki application.
//!
//! Provides the chat state store, the websocket transport it is wired to,
//! and the HTTP API client used to fetch the roster and message history.

pub mod api;
pub mod domain;
pub mod dto;
pub mod error;
pub mod formatter;
pub mod store;
pub mod transport;
