//! Error types for cooltown-search

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::RecognitionError;

/// API error type
///
/// Upstream details are logged; responses carry fixed messages only.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Recognition stage failure (500/502)
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Recognition(RecognitionError::RecognitionFailed(reason)) => {
                tracing::warn!(reason = %reason, "Recognition failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RECOGNITION_FAILED",
                    "recognition failed".to_string(),
                )
            }
            ApiError::Recognition(ref err @ RecognitionError::UpstreamUnavailable(_)) => {
                tracing::error!(error = %err, "Recognition API call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    "recognition API unavailable".to_string(),
                )
            }
            ApiError::Recognition(ref err @ RecognitionError::ProtocolError(_)) => {
                tracing::error!(error = %err, "Recognition API response not understood");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROTOCOL_ERROR",
                    "unexpected recognition API response".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
