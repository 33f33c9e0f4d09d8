//! HTTP wire types.

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on failed requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBodyDto {
    pub message: String,
}
