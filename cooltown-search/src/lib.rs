//! cooltown-search library - Recognition Broker
//!
//! Bridges the pipeline and the external fingerprinting API: a fragment in,
//! a track id (the recognized title) out.

use axum::{extract::Request, Router};
use chrono::{DateTime, Utc};
use cooltown_common::api::REQUEST_ID_HEADER;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;

pub mod api;
pub mod config;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult};
use crate::services::RecognitionClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Recognition API client, configured once at startup
    pub recognizer: Arc<RecognitionClient>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(recognizer: RecognitionClient) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    Router::new()
        .route("/recognize", post(api::recognize))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

/// Request span carrying the caller's `x-request-id`, or `-` when absent
fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}
