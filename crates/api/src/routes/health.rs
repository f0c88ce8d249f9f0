use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when Postgres does not answer.
    pub status: &'static str,
    /// Version of the running `foundercast-api` build.
    pub version: &'static str,
    /// Result of a `SELECT 1` against the pool.
    pub db_healthy: bool,
}

/// Liveness check for load balancers. Always 200; the body reports the
/// database state.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = foundercast_db::health_check(&state.pool).await.is_ok();
    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `/health`, merged at the root so it stays outside the versioned API.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
