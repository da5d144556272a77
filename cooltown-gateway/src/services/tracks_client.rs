//! Track store client
//!
//! The gateway reads tracks through the store's HTTP API, never its database.

use cooltown_common::api::{AudioBody, REQUEST_ID_HEADER};
use cooltown_common::track_key::encode_path_segment;

use super::join_url;
use crate::error::{GatewayError, Stage};

/// Client for `GET {tracks_url}/tracks/{id}`
#[derive(Debug, Clone)]
pub struct TracksClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl TracksClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Lookup path for a track id (`My Song` → `tracks/My+Song`)
    pub fn track_path(id: &str) -> String {
        format!("tracks/{}", encode_path_segment(id))
    }

    /// Fetch the audio payload stored under `id`
    ///
    /// Status is checked before the body is read: a 404 carries no track.
    pub async fn fetch_audio(&self, id: &str, request_id: &str) -> Result<String, GatewayError> {
        let url = join_url(&self.base_url, &Self::track_path(id));

        let response = self
            .http_client
            .get(&url)
            .header(REQUEST_ID_HEADER, request_id)
            .send()
            .await
            .map_err(|e| GatewayError::UpstreamUnavailable {
                stage: Stage::Lookup,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(GatewayError::UpstreamStatus {
                stage: Stage::Lookup,
                status: status.as_u16(),
            });
        }

        let track: AudioBody = response.json().await.map_err(|e| GatewayError::Internal {
            stage: Stage::Lookup,
            message: format!("failed to decode tracks response: {}", e),
        })?;

        Ok(track.audio)
    }
}
