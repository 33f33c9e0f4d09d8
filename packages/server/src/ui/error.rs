//! Centralized error responder for the HTTP surface.
//!
//! Handlers forward failures here instead of handling them locally; this is
//! the single place where an internal error becomes a client-visible
//! response.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use thiserror::Error;

use crate::infrastructure::dto::http::ErrorBodyDto;
use crate::usecase::GetStatsError;

/// Errors leaving the HTTP surface
#[derive(Debug, Error)]
pub enum ApiError {
    /// A statistics read failed
    #[error(transparent)]
    GetStats(#[from] GetStatsError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!("request failed: {}", message);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBodyDto { message }),
        )
            .into_response()
    }
}
