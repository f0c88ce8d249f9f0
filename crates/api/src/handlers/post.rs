//! Handlers for the `/posts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use foundercast_core::error::CoreError;
use foundercast_core::types::DbId;
use foundercast_core::validation::{non_empty, require_non_blank};
use foundercast_db::models::post::{CreatePost, Post};
use foundercast_db::repositories::{CompanyRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/posts/mine
pub async fn mine(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/posts/company/{company_id}
pub async fn list_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list_by_company(&state.pool, company_id).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/posts
///
/// The post is attached to the caller's own company.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreatePost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    require_non_blank("title", &input.title)?;

    let company = CompanyRepo::find_by_user(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found("Company for user", auth_user.user_id))
        })?;

    let input = CreatePost {
        title: input.title.trim().to_string(),
        description: non_empty(input.description),
    };
    let post = PostRepo::create(&state.pool, auth_user.user_id, company.id, &input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;
    if post.user_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only delete your own posts".into(),
        )));
    }

    PostRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
