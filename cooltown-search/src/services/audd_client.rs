//! audd.io recognition API client
//!
//! Sends the fragment with the service token and reduces the response to the
//! recognized title, which the rest of the pipeline uses as the track id.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const AUDD_API_URL: &str = "https://api.audd.io/recognize";
const USER_AGENT: &str = concat!("cooltown-search/", env!("CARGO_PKG_VERSION"));

/// Recognition failures, by which side of the call went wrong
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// API answered but did not identify the fragment
    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),

    /// Transport failure or non-200 HTTP status
    #[error("Recognition API unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Response body did not match the API contract
    #[error("Recognition API protocol error: {0}")]
    ProtocolError(String),
}

/// Recognition API settings, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub api_url: String,
    pub api_token: String,
}

#[derive(Debug, Serialize)]
struct AuddRequest<'a> {
    api_token: &'a str,
    audio: &'a str,
}

/// audd.io response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct AuddResponse {
    pub status: String,
    /// `null` when the fragment matched nothing
    #[serde(default)]
    pub result: Option<AuddResult>,
    #[serde(default)]
    pub error: Option<AuddError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuddResult {
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuddError {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Recognition API client
///
/// Holds one pooled HTTP client for the life of the service. No request
/// timeout is set beyond the transport default and nothing is retried.
pub struct RecognitionClient {
    http_client: reqwest::Client,
    config: RecognitionConfig,
}

impl RecognitionClient {
    pub fn new(config: RecognitionConfig) -> Result<Self, RecognitionError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RecognitionError::UpstreamUnavailable(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    /// Identify a fragment, returning the recognized title
    pub async fn recognize(&self, fragment: &str) -> Result<String, RecognitionError> {
        let request = AuddRequest {
            api_token: &self.config.api_token,
            audio: fragment,
        };

        tracing::debug!(fragment_len = fragment.len(), "Querying recognition API");

        let response = self
            .http_client
            .post(&self.config.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecognitionError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Recognition API returned non-200");
            return Err(RecognitionError::UpstreamUnavailable(format!(
                "HTTP {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RecognitionError::UpstreamUnavailable(e.to_string()))?;

        interpret_response(&body)
    }
}

/// Map a 200 response body to a title or a recognition error
pub fn interpret_response(body: &[u8]) -> Result<String, RecognitionError> {
    let response: AuddResponse = serde_json::from_slice(body)
        .map_err(|e| RecognitionError::ProtocolError(e.to_string()))?;

    if response.status != "success" {
        tracing::warn!(
            api_status = %response.status,
            body = %String::from_utf8_lossy(body),
            "Recognition API reported an error"
        );
        let reason = response
            .error
            .and_then(|e| e.error_message)
            .unwrap_or(response.status);
        return Err(RecognitionError::RecognitionFailed(reason));
    }

    let Some(result) = response.result else {
        tracing::info!("Recognition API found no match");
        return Err(RecognitionError::RecognitionFailed("no match".to_string()));
    };

    match result.title {
        Some(title) if !title.is_empty() => {
            tracing::info!(
                title = %title,
                artist = result.artist.as_deref().unwrap_or(""),
                "Recognition successful"
            );
            Ok(title)
        }
        _ => Err(RecognitionError::ProtocolError(
            "result has no title".to_string(),
        )),
    }
}
