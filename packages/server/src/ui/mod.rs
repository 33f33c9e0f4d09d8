//! UI layer: HTTP surface of the statistics server.

pub mod error;
pub mod handler;
pub mod server;
pub mod signal;
pub mod state;

pub use server::Server;
