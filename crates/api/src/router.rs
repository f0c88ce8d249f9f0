//! Router assembly for the FounderCast API.
//!
//! The binary and the integration tests both call [`build_app_router`], so
//! tests exercise the same timeouts, request ids and CORS rules as production.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Headroom on top of the video agent client timeout for the database work
/// around a render.
pub const GENERATION_TIMEOUT_MARGIN_SECS: u64 = 30;

/// Assemble every route group and wrap it in the shared middleware.
///
/// Outermost first, a request passes CORS, gets an `x-request-id`, is traced,
/// has the id copied onto the response, and is guarded by panic recovery.
/// Timeouts are attached per route group: `POST /api/v1/videos/generate`
/// waits for the video agent and is bounded by `video_agent_timeout_secs`
/// plus [`GENERATION_TIMEOUT_MARGIN_SECS`], everything else by
/// `request_timeout_secs`. Both answer `408` when exceeded.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    let standard = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(timeout_layer(config.request_timeout_secs));

    let generation = Router::new()
        .nest("/api/v1/videos", routes::video::generation_router())
        .layer(timeout_layer(
            config.video_agent_timeout_secs + GENERATION_TIMEOUT_MARGIN_SECS,
        ));

    standard
        .merge(generation)
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

fn timeout_layer(secs: u64) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(secs))
}

/// CORS for the configured frontend origins, with credentials allowed.
///
/// An origin that does not parse as a header value aborts startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
