//! Track CRUD endpoints
//!
//! Ids arrive as path segments using the `+`-for-space convention shared
//! with the gateway. axum's path extractors percent-decode before `+` can be
//! told apart from `%2B`, so the segment is taken from the request URI and
//! decoded exactly once here.

use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::StatusCode,
    Json,
};
use cooltown_common::track_key::decode_path_segment;
use tracing::{debug, info};

use crate::db::{DeleteOutcome, PutOutcome, Track};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

const TRACK_PATH_PREFIX: &str = "/tracks/";

/// Decode the track id from a still-encoded `/tracks/{id}` request path
fn path_track_id(path: &str) -> ApiResult<String> {
    let raw = path
        .strip_prefix(TRACK_PATH_PREFIX)
        .filter(|segment| !segment.is_empty() && !segment.contains('/'))
        .ok_or_else(|| ApiError::BadRequest("missing track id".to_string()))?;

    decode_path_segment(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// GET /tracks/:id
pub async fn read_track(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Json<Track>> {
    let id = path_track_id(uri.path())?;

    match state.tracks.get(&id).await? {
        Some(track) => {
            debug!(track_id = %id, "Track read");
            Ok(Json(track))
        }
        None => {
            debug!(track_id = %id, "Track not found");
            Err(ApiError::NotFound(format!("track '{}'", id)))
        }
    }
}

/// PUT /tracks/:id
///
/// 201 when the track is new, 204 when it replaced an existing one.
pub async fn store_track(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let id = path_track_id(uri.path())?;

    let track: Track = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid track body: {}", e)))?;

    if track.id != id {
        return Err(ApiError::BadRequest(format!(
            "path id '{}' does not match body id '{}'",
            id, track.id
        )));
    }

    let outcome = state.tracks.put(&track).await?;
    info!(track_id = %id, outcome = ?outcome, "Track stored");

    Ok(match outcome {
        PutOutcome::Created => StatusCode::CREATED,
        PutOutcome::Updated => StatusCode::NO_CONTENT,
    })
}

/// DELETE /tracks/:id
pub async fn delete_track(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<StatusCode> {
    let id = path_track_id(uri.path())?;

    match state.tracks.delete(&id).await? {
        DeleteOutcome::Deleted => {
            info!(track_id = %id, "Track deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::NotFound => Err(ApiError::NotFound(format!("track '{}'", id))),
    }
}

/// GET /tracks
///
/// Ids only, ascending. An empty store is `200 []`.
pub async fn list_tracks(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let ids = state.tracks.list().await?;
    debug!(count = ids.len(), "Tracks listed");
    Ok(Json(ids))
}

/// DELETE /tracks
pub async fn clear_tracks(State(state): State<AppState>) -> ApiResult<StatusCode> {
    let removed = state.tracks.clear().await?;
    info!(removed, "Track store cleared");
    Ok(StatusCode::NO_CONTENT)
}
