//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::StatsSummaryDto, ui::error::ApiError, ui::state::AppState};

/// Get library-wide statistics
///
/// Runs the four catalog reads concurrently and responds with the aggregate
/// record. Read failures are not handled here; they propagate to the
/// centralized [`ApiError`] responder.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsSummaryDto>, ApiError> {
    let summary = state.get_stats_usecase.execute().await?;

    // Domain Model から DTO への変換
    Ok(Json(StatsSummaryDto::from(summary)))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
