//! Data transfer objects for the HTTP surface.

pub mod conversion;
pub mod http;
