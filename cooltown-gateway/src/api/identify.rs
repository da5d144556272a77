//! Client-facing identify endpoint

use axum::{body::Bytes, extract::State, Json};
use cooltown_common::api::AudioBody;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::GatewayResult;
use crate::AppState;

/// POST /identify
///
/// Request `{"audio": <fragment>}`, response `{"audio": <stored payload>}`.
/// Failures answer with a bare status code.
pub async fn identify(State(state): State<AppState>, body: Bytes) -> GatewayResult<Json<AudioBody>> {
    let request_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("identify", request_id = %request_id);

    let payload = state
        .pipeline
        .handle(&request_id, &body)
        .instrument(span)
        .await?;
    Ok(Json(payload))
}
