//! Handlers for the `/creators` resource, served from the preset catalog.

use axum::extract::Path;
use axum::Json;
use foundercast_core::creators::{find_creator, CreatorProfile, CREATORS};
use foundercast_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// GET /api/v1/creators
pub async fn list() -> Json<DataResponse<&'static [CreatorProfile]>> {
    Json(DataResponse { data: &CREATORS })
}

/// GET /api/v1/creators/{id}
pub async fn get_by_id(Path(id): Path<String>) -> AppResult<Json<&'static CreatorProfile>> {
    let creator =
        find_creator(&id).ok_or_else(|| AppError::Core(CoreError::not_found("Creator", &id)))?;
    Ok(Json(creator))
}
