//! Recognition endpoint

use axum::{body::Bytes, extract::State, Json};
use cooltown_common::api::{extract_audio, RecognizeResponse};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /recognize
///
/// Request `{"audio": <fragment>}` (`Audio` also accepted), response
/// `{"id": <recognized title>}`.
pub async fn recognize(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<RecognizeResponse>> {
    let request: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("failed to decode request body: {}", e)))?;

    let audio = extract_audio(&request)
        .ok_or_else(|| ApiError::BadRequest("audio is missing".to_string()))?;

    let id = state.recognizer.recognize(audio).await?;
    Ok(Json(RecognizeResponse { id }))
}
