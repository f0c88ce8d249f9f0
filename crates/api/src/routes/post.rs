//! Route definitions for the `/posts` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::post as handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create))
        .route("/mine", get(handlers::mine))
        .route("/company/{company_id}", get(handlers::list_by_company))
        .route("/{id}", delete(handlers::delete))
}
