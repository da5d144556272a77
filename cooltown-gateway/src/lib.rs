//! cooltown-gateway library - Gateway Orchestrator
//!
//! Client-facing service: recognizes a fragment through cooltown-search,
//! then fetches the matching track from cooltown-tracks over HTTP.
//!
//! Calls are attempted exactly once. A client that disconnects does not
//! cancel upstream calls already in flight.

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod services;

pub use crate::error::{GatewayError, GatewayResult, Stage};
pub use crate::pipeline::{IdentifyPipeline, UpstreamConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<IdentifyPipeline>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(pipeline: IdentifyPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    Router::new()
        .route("/identify", post(api::identify))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
