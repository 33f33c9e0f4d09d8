//! Shared application state for the HTTP handlers.

use std::sync::Arc;

use crate::usecase::GetStatsUseCase;

/// Shared application state
pub struct AppState {
    /// GetStatsUseCase（統計取得のユースケース）
    pub get_stats_usecase: Arc<GetStatsUseCase>,
}
