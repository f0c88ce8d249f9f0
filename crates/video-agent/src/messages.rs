//! Wire types for the video agent HTTP API.

use chrono::NaiveDateTime;
use foundercast_core::types::{ExternalCreatorId, Timestamp};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub company_name: String,
    pub use_case: String,
    pub founder_name: String,
    pub founder_role: String,
    pub interesting_context: String,
    pub creator_id: ExternalCreatorId,
}

/// Response of `POST /api/generate`.
///
/// `video_url` is either an absolute URL, a path on the agent's origin, or
/// the `placeholder.mp4` sentinel while rendering is still in progress.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub input: serde_json::Value,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Whether the body itself reports a failure, regardless of HTTP status.
    pub fn reports_failure(&self) -> bool {
        matches!(self.status.as_str(), "failed" | "error")
            || self.error.as_deref().is_some_and(|e| !e.trim().is_empty())
    }

    /// The returned media reference, if it is non-blank.
    pub fn usable_video_url(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// One entry of `GET /api/creators`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteCreator {
    pub id: ExternalCreatorId,
    pub name: String,
    pub image: String,
}

/// One entry of `GET /api/videos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteVideo {
    pub id: String,
    pub company_name: String,
    pub founder_name: String,
    pub creator_id: ExternalCreatorId,
    #[serde(default)]
    pub creator_name: String,
    pub video_url: String,
    #[serde(default)]
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl RemoteVideo {
    /// Parse `created_at`, accepting RFC 3339 or a naive ISO timestamp
    /// (interpreted as UTC).
    pub fn created_at_utc(&self) -> Option<Timestamp> {
        if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(ts.with_timezone(&chrono::Utc));
        }
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Error body shape used by the agent (`detail` from FastAPI, or `message`).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub(crate) fn text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) if !other.is_null() => Some(other.to_string()),
            _ => self.message.clone(),
        }
    }
}
