//! Route definitions for the `/creators` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::creator;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(creator::list))
        .route("/{id}", get(creator::get_by_id))
}
