//! UseCase error types.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors surfaced by `GetStatsUseCase`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetStatsError {
    /// One of the catalog reads failed; forwarded unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
