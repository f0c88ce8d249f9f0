pub mod auth;
pub mod company;
pub mod creator;
pub mod health;
pub mod post;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/signup                      signup (public)
/// /auth/login                       login (public)
/// /auth/refresh                     refresh (public)
/// /auth/logout                      logout (requires auth)
/// /auth/me                          current user (requires auth)
///
/// /companies                        list, create
/// /companies/mine                   caller's company
/// /companies/use-case               LLM use case draft
/// /companies/interesting-fact       LLM fact draft
/// /companies/{id}                   get, update, delete
///
/// /creators                         preset catalog
/// /creators/{id}                    one preset
///
/// /posts                            create
/// /posts/mine                       caller's posts
/// /posts/company/{company_id}       posts for a company
/// /posts/{id}                       delete
///
/// /videos/creators                  video agent creators
/// /videos/generate                  generate or reuse a founder video
/// /videos/creator/{creator_id}      merged creator feed
/// /videos/remote                    video agent videos
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/companies", company::router())
        .nest("/creators", creator::router())
        .nest("/posts", post::router())
        .nest("/videos", video::router())
}
