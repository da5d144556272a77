//! Wire types shared between the Cooltown services
//!
//! Field names are lowercase on the wire. Older clients of these
//! services sent capitalized names (`Audio`, `Id`), so decoders accept both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header carrying the gateway's per-request id to the upstream services
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Track as served by the track store (`GET /tracks/{id}`, `PUT /tracks/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Audio")]
    pub audio: String,
}

/// Body carrying an audio fragment or payload
///
/// Used for gateway → search requests and for gateway responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioBody {
    #[serde(alias = "Audio")]
    pub audio: String,
}

/// Recognition result returned by the search service (`POST /recognize`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizeResponse {
    #[serde(alias = "Id")]
    pub id: String,
}

/// Pull the audio fragment out of a decoded request body.
///
/// `Audio` is checked first, then `audio`; a field that is missing, empty
/// or not a string falls through to the other spelling.
pub fn extract_audio(body: &Value) -> Option<&str> {
    ["Audio", "audio"].iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .filter(|audio| !audio.is_empty())
    })
}

/// Health check response, identical across services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("ok")
    pub status: String,
    /// Module name (e.g. "cooltown-tracks")
    pub module: String,
    /// Crate version from Cargo.toml
    pub version: String,
    /// Seconds since service started
    pub uptime_seconds: u64,
}

impl HealthResponse {
    pub fn ok(module: &str, version: &str, started_at: DateTime<Utc>) -> Self {
        let uptime = Utc::now().signed_duration_since(started_at);
        Self {
            status: "ok".to_string(),
            module: module.to_string(),
            version: version.to_string(),
            uptime_seconds: uptime.num_seconds().max(0) as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_audio_either_spelling() {
        assert_eq!(extract_audio(&json!({"Audio": "x"})), Some("x"));
        assert_eq!(extract_audio(&json!({"audio": "x"})), Some("x"));
    }

    #[test]
    fn test_extract_audio_capitalized_wins() {
        let body = json!({"Audio": "upper", "audio": "lower"});
        assert_eq!(extract_audio(&body), Some("upper"));
    }

    #[test]
    fn test_extract_audio_empty_falls_through() {
        assert_eq!(extract_audio(&json!({"Audio": "", "audio": "x"})), Some("x"));
        assert_eq!(extract_audio(&json!({"Audio": "", "audio": ""})), None);
        assert_eq!(extract_audio(&json!({})), None);
    }

    #[test]
    fn test_extract_audio_rejects_non_strings() {
        assert_eq!(extract_audio(&json!({"audio": 42})), None);
        assert_eq!(extract_audio(&json!(["audio"])), None);
        assert_eq!(extract_audio(&json!(null)), None);
    }

    #[test]
    fn test_track_record_accepts_capitalized_fields() {
        let track: TrackRecord =
            serde_json::from_value(json!({"Id": "My Song", "Audio": "payload"})).unwrap();
        assert_eq!(track.id, "My Song");
        assert_eq!(track.audio, "payload");

        let encoded = serde_json::to_value(&track).unwrap();
        assert_eq!(encoded, json!({"id": "My Song", "audio": "payload"}));
    }

    #[test]
    fn test_health_uptime_never_negative() {
        let future = Utc::now() + chrono::Duration::seconds(60);
        let health = HealthResponse::ok("cooltown-test", "0.1.0", future);
        assert_eq!(health.uptime_seconds, 0);
        assert_eq!(health.status, "ok");
    }
}
