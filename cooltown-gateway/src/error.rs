//! Error types for cooltown-gateway
//!
//! Every failure names the pipeline stage it came from. Upstream statuses are
//! mirrored to the client; everything else the gateway cannot attribute to
//! an upstream status becomes 500. Responses never carry a body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

/// Pipeline stage, for logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding the client request
    Decode,
    /// Calling the recognition broker
    Recognize,
    /// Fetching the track from the store
    Lookup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Decode => "decode",
            Stage::Recognize => "recognize",
            Stage::Lookup => "lookup",
        })
    }
}

/// Gateway failure
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing, empty or malformed client input (400)
    #[error("bad input: {0}")]
    BadInput(String),

    /// Upstream answered with a non-200 status (mirrored)
    #[error("{stage}: upstream returned HTTP {status}")]
    UpstreamStatus { stage: Stage, status: u16 },

    /// Upstream could not be reached (500)
    #[error("{stage}: upstream unreachable: {message}")]
    UpstreamUnavailable { stage: Stage, message: String },

    /// Decode or encode failure (500)
    #[error("{stage}: internal error: {message}")]
    Internal { stage: Stage, message: String },
}

impl GatewayError {
    pub fn stage(&self) -> Stage {
        match self {
            GatewayError::BadInput(_) => Stage::Decode,
            GatewayError::UpstreamStatus { stage, .. }
            | GatewayError::UpstreamUnavailable { stage, .. }
            | GatewayError::Internal { stage, .. } => *stage,
        }
    }

    /// Status code sent to the client
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            GatewayError::UpstreamUnavailable { .. } | GatewayError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Log with stage and upstream status; details stay out of the response
    pub fn log(&self) {
        let stage = self.stage();
        match self {
            GatewayError::BadInput(msg) => {
                tracing::warn!(%stage, "Rejected request: {}", msg);
            }
            GatewayError::UpstreamStatus { status, .. } => {
                tracing::warn!(%stage, upstream_status = status, "Unexpected upstream status");
            }
            GatewayError::UpstreamUnavailable { message, .. } => {
                tracing::error!(%stage, "Upstream unreachable: {}", message);
            }
            GatewayError::Internal { message, .. } => {
                tracing::error!(%stage, "Internal error: {}", message);
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

/// Result type for gateway handlers
pub type GatewayResult<T> = Result<T, GatewayError>;
