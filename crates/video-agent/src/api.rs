//! HTTP client for the video agent.
//!
//! Wraps the agent's REST endpoints (video generation, creator listing,
//! generated-video listing) using [`reqwest`].

use foundercast_core::types::ExternalCreatorId;

use crate::messages::{ErrorBody, GenerateRequest, GenerateResponse, RemoteCreator, RemoteVideo};

/// HTTP client for a video agent instance.
pub struct VideoAgentApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the video agent REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum VideoAgentError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The agent returned a non-2xx status code.
    #[error("Video agent error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
        /// Human-readable message extracted from the body, if any.
        message: Option<String>,
    },
}

impl VideoAgentError {
    /// The most useful message to show a caller: the agent's own message when
    /// it sent one, otherwise the error's display text.
    pub fn upstream_message(&self) -> String {
        match self {
            Self::ApiError {
                message: Some(msg), ..
            } => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl VideoAgentApi {
    /// Create a new API client for a video agent.
    ///
    /// * `api_url` - Base HTTP URL (origin), e.g. `http://localhost:8000`.
    pub fn new(api_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (e.g. one built with a request timeout).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// The agent's origin; relative media paths are resolved against it.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Request a founder video.
    ///
    /// Sends `POST /api/generate`. Rendering happens inside this call, so it
    /// can take minutes; the client's timeout bounds it.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, VideoAgentError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.api_url))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List the creator personas the agent knows about (`GET /api/creators`).
    pub async fn creators(&self) -> Result<Vec<RemoteCreator>, VideoAgentError> {
        let response = self
            .client
            .get(format!("{}/api/creators", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List videos the agent has generated, optionally for one creator
    /// (`GET /api/videos[?creator_id=N]`).
    pub async fn videos(
        &self,
        creator_id: Option<ExternalCreatorId>,
    ) -> Result<Vec<RemoteVideo>, VideoAgentError> {
        let mut request = self.client.get(format!("{}/api/videos", self.api_url));
        if let Some(id) = creator_id {
            request = request.query(&[("creator_id", id)]);
        }
        let response = request.send().await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`VideoAgentError::ApiError`]
    /// containing the status, body text and extracted message on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, VideoAgentError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.text());
            return Err(VideoAgentError::ApiError {
                status: status.as_u16(),
                body,
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, VideoAgentError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
