#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use foundercast_api::auth::jwt::JwtConfig;
use foundercast_api::config::ServerConfig;
use foundercast_api::router::build_app_router;
use foundercast_api::state::AppState;
use foundercast_core::types::ExternalCreatorId;
use foundercast_llm::PerplexityApi;
use foundercast_pipeline::VideoService;
use foundercast_video_agent::messages::{
    GenerateRequest, GenerateResponse, RemoteCreator, RemoteVideo,
};
use foundercast_video_agent::VideoAgentError;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const AGENT_ORIGIN: &str = "http://agent.test";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        video_agent_url: AGENT_ORIGIN.to_string(),
        video_agent_timeout_secs: 5,
        perplexity_api_key: None,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

// ---------------------------------------------------------------------------
// Fake video agent
// ---------------------------------------------------------------------------

/// In-process stand-in for the video agent.
///
/// Each generate call returns `/api/videos/vid-<n>.mp4`. Set `fail_generate`
/// or `fail_listing` to make the respective calls return an upstream error,
/// and `generate_delay` to simulate a slow render.
#[derive(Default)]
pub struct FakeVideoAgent {
    pub generate_calls: AtomicUsize,
    pub generate_delay: Duration,
    pub fail_generate: Mutex<bool>,
    pub fail_listing: bool,
    pub remote_videos: Vec<RemoteVideo>,
}

impl FakeVideoAgent {
    pub fn calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoService for FakeVideoAgent {
    fn origin(&self) -> &str {
        AGENT_ORIGIN
    }

    async fn generate(
        &self,
        _request: &GenerateRequest,
    ) -> Result<GenerateResponse, VideoAgentError> {
        let n = self.generate_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.generate_delay.is_zero() {
            tokio::time::sleep(self.generate_delay).await;
        }
        if *self.fail_generate.lock().unwrap() {
            return Err(VideoAgentError::ApiError {
                status: 500,
                body: r#"{"detail":"renderer crashed"}"#.to_string(),
                message: Some("renderer crashed".to_string()),
            });
        }
        Ok(GenerateResponse {
            message: "Video generated successfully".to_string(),
            status: "completed".to_string(),
            video_url: Some(format!("/api/videos/vid-{n}.mp4")),
            video_id: Some(format!("vid-{n}")),
            ..Default::default()
        })
    }

    async fn creators(&self) -> Result<Vec<RemoteCreator>, VideoAgentError> {
        if self.fail_listing {
            return Err(unavailable());
        }
        Ok(vec![RemoteCreator {
            id: 0,
            name: "Samantha Hayes".to_string(),
            image: "/static/creators/0.jpg".to_string(),
        }])
    }

    async fn videos(
        &self,
        creator_id: Option<ExternalCreatorId>,
    ) -> Result<Vec<RemoteVideo>, VideoAgentError> {
        if self.fail_listing {
            return Err(unavailable());
        }
        Ok(self
            .remote_videos
            .iter()
            .filter(|v| creator_id.map_or(true, |id| v.creator_id == id))
            .cloned()
            .collect())
    }
}

fn unavailable() -> VideoAgentError {
    VideoAgentError::ApiError {
        status: 503,
        body: "Service Unavailable".to_string(),
        message: None,
    }
}

pub fn remote_video(id: &str, creator_id: ExternalCreatorId, created_at: &str) -> RemoteVideo {
    RemoteVideo {
        id: id.to_string(),
        company_name: "Remote Co".to_string(),
        founder_name: "Rae".to_string(),
        creator_id,
        creator_name: String::new(),
        video_url: format!("/api/videos/{id}.mp4"),
        status: "completed".to_string(),
        created_at: created_at.to_string(),
        metadata: serde_json::Value::Null,
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Full application router backed by `pool` and a default fake agent.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Arc::new(FakeVideoAgent::default()), None)
}

/// Full application router with an explicit agent and optional LLM client.
pub fn build_test_app_with(
    pool: PgPool,
    agent: Arc<FakeVideoAgent>,
    llm: Option<PerplexityApi>,
) -> Router {
    build_test_app_with_config(pool, agent, llm, test_config())
}

/// Like [`build_test_app_with`] but with caller-supplied server settings.
pub fn build_test_app_with_config(
    pool: PgPool,
    agent: Arc<FakeVideoAgent>,
    llm: Option<PerplexityApi>,
    config: ServerConfig,
) -> Router {
    let state = AppState::new(pool, config.clone(), agent, llm);
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Sign up a user and return `(access_token, user_id)`.
pub async fn signup(app: Router, email: &str) -> (String, i64) {
    let body = serde_json::json!({
        "name": "Test Founder",
        "email": email,
        "password": "secret123",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["access_token"].as_str().unwrap().to_string(),
        json["user"]["id"].as_i64().unwrap(),
    )
}

/// Create the caller's company and return its id.
pub async fn create_company(app: Router, token: &str, name: &str) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "description": "We build things",
        "website_url": "https://example.com",
        "use_case": "Automating onboarding",
    });
    let response = post_json_auth(app, "/api/v1/companies", body, token).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
