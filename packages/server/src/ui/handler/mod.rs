pub mod http;

pub use http::{get_stats, health_check};
