//! UseCase layer: application operations built on the domain interfaces.

pub mod error;
pub mod get_stats;

pub use error::GetStatsError;
pub use get_stats::GetStatsUseCase;
