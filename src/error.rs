//! API-level error type and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::indicators::IndicatorError;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// Indicator resolution or computation failed at the request level.
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::Indicator(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
