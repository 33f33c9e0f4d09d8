//! Repository error types.

use thiserror::Error;

/// Errors surfaced by a `CatalogRepository` implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The underlying store could not be reached
    #[error("catalog store unavailable: {0}")]
    StoreUnavailable(String),

    /// A read against the store failed
    #[error("catalog read failed: {0}")]
    ReadFailed(String),
}
