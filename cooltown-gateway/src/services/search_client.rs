//! Recognition broker client

use cooltown_common::api::{RecognizeResponse, REQUEST_ID_HEADER};
use serde_json::json;

use super::join_url;
use crate::error::{GatewayError, Stage};

/// Client for `POST {search_url}/recognize`
#[derive(Debug, Clone)]
pub struct SearchClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Ask the broker to identify a fragment, returning the track id
    pub async fn recognize(&self, audio: &str, request_id: &str) -> Result<String, GatewayError> {
        let url = join_url(&self.base_url, "recognize");

        let response = self
            .http_client
            .post(&url)
            .header(REQUEST_ID_HEADER, request_id)
            .json(&json!({ "audio": audio }))
            .send()
            .await
            .map_err(|e| GatewayError::UpstreamUnavailable {
                stage: Stage::Recognize,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(GatewayError::UpstreamStatus {
                stage: Stage::Recognize,
                status: status.as_u16(),
            });
        }

        let recognized: RecognizeResponse =
            response.json().await.map_err(|e| GatewayError::Internal {
                stage: Stage::Recognize,
                message: format!("failed to decode search response: {}", e),
            })?;

        if recognized.id.is_empty() {
            return Err(GatewayError::Internal {
                stage: Stage::Recognize,
                message: "search response has an empty id".to_string(),
            });
        }

        Ok(recognized.id)
    }
}
