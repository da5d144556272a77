//! cooltown-tracks library - Track Store
//!
//! Persists audio payloads keyed by recognized title and serves them over a
//! CRUD HTTP contract. The gateway reaches it over the network only.

use axum::{extract::Request, Router};
use chrono::{DateTime, Utc};
use cooltown_common::api::REQUEST_ID_HEADER;
use tower_http::trace::TraceLayer;
use tracing::Span;

pub mod api;
pub mod config;
pub mod db;
pub mod error;

pub use crate::db::TrackRepository;
pub use crate::error::{ApiError, ApiResult, StoreError};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Track repository over the shared pool
    pub tracks: TrackRepository,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(tracks: TrackRepository) -> Self {
        Self {
            tracks,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/tracks",
            get(api::list_tracks).delete(api::clear_tracks),
        )
        .route(
            "/tracks/:id",
            get(api::read_track)
                .put(api::store_track)
                .delete(api::delete_track),
        )
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
