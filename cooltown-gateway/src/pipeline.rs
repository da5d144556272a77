//! Identify pipeline
//!
//! decode → recognize → lookup → respond. Each stage runs once and the first
//! failure ends the request; the store is never queried after a failed
//! recognition.

use cooltown_common::api::{extract_audio, AudioBody};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{GatewayError, GatewayResult};
use crate::services::{build_http_client, SearchClient, TracksClient};

/// Upstream service locations, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub search_url: String,
    pub tracks_url: String,
}

/// Stateless per request; safe to share across tasks
#[derive(Debug, Clone)]
pub struct IdentifyPipeline {
    search: SearchClient,
    tracks: TracksClient,
}

impl IdentifyPipeline {
    pub fn new(search: SearchClient, tracks: TracksClient) -> Self {
        Self { search, tracks }
    }

    /// Build both upstream clients over one pooled HTTP client
    pub fn from_config(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let http_client = build_http_client()?;
        Ok(Self::new(
            SearchClient::new(http_client.clone(), config.search_url.clone()),
            TracksClient::new(http_client, config.tracks_url.clone()),
        ))
    }

    /// Run the pipeline for one client request body
    ///
    /// `request_id` is forwarded to both upstream services.
    pub async fn handle(&self, request_id: &str, body: &[u8]) -> GatewayResult<AudioBody> {
        let result = self.run(request_id, body).await;
        if let Err(err) = &result {
            err.log();
        }
        result
    }

    async fn run(&self, request_id: &str, body: &[u8]) -> GatewayResult<AudioBody> {
        let fragment = decode_request(body)?;
        debug!(fragment_len = fragment.len(), "Request decoded");

        let track_id = self.search.recognize(&fragment, request_id).await?;
        debug!(track_id = %track_id, "Fragment recognized");

        let audio = self.tracks.fetch_audio(&track_id, request_id).await?;
        info!(track_id = %track_id, "Track identified");

        Ok(AudioBody { audio })
    }
}

/// Extract the audio fragment from a client request body
pub fn decode_request(body: &[u8]) -> GatewayResult<String> {
    let request: Value = serde_json::from_slice(body)
        .map_err(|e| GatewayError::BadInput(format!("request body is not JSON: {}", e)))?;

    extract_audio(&request)
        .map(str::to_string)
        .ok_or_else(|| GatewayError::BadInput("audio field missing or empty".to_string()))
}
