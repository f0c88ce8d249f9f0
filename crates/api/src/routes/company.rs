//! Route definitions for the `/companies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(company::list).post(company::create))
        .route("/mine", get(company::mine))
        .route("/use-case", post(company::generate_use_case))
        .route("/interesting-fact", post(company::generate_interesting_fact))
        .route(
            "/{id}",
            get(company::get_by_id)
                .put(company::update)
                .delete(company::delete),
        )
}
