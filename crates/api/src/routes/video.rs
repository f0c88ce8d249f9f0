//! Route definitions for the `/videos` resource.
//!
//! ```text
//! GET  /creators                 list_remote_creators
//! GET  /creator/{creator_id}     list_for_creator
//! GET  /remote                   list_remote_videos
//! ```
//!
//! `POST /generate` lives in [`generation_router`] because it waits on a
//! render and gets its own timeout in [`crate::router`].

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/creators", get(video::list_remote_creators))
        .route("/creator/{creator_id}", get(video::list_for_creator))
        .route("/remote", get(video::list_remote_videos))
}

/// `POST /generate`, kept apart so it can be layered with the video agent
/// timeout instead of the general request timeout.
pub fn generation_router() -> Router<AppState> {
    Router::new().route("/generate", post(video::generate))
}
