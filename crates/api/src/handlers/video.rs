//! Handlers for the `/videos` resource.
//!
//! `generate` and `list_for_creator` go through the generation coordinator;
//! the remaining endpoints pass the video agent's listings through.

use axum::extract::{Path, State};
use axum::Json;
use foundercast_core::fingerprint::VideoBrief;
use foundercast_core::media::normalize_media_url;
use foundercast_core::types::{DbId, ExternalCreatorId};
use foundercast_pipeline::{CreatorFeed, GenerationOutcome, GenerationRequest};
use foundercast_video_agent::messages::{RemoteCreator, RemoteVideo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /videos/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateVideoRequest {
    pub company_id: DbId,
    /// Creator id in the video agent's numbering (0-based).
    pub creator_id: ExternalCreatorId,
    pub company_name: String,
    pub use_case: String,
    pub founder_name: String,
    pub founder_role: String,
    #[serde(default)]
    pub interesting_context: String,
    #[serde(default)]
    pub force_regenerate: bool,
}

/// GET /api/v1/videos/creators
pub async fn list_remote_creators(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<RemoteCreator>>>> {
    let creators = state.video_agent.creators().await?;
    Ok(Json(DataResponse { data: creators }))
}

/// POST /api/v1/videos/generate
pub async fn generate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<GenerateVideoRequest>,
) -> AppResult<Json<GenerationOutcome>> {
    tracing::info!(
        user_id = auth_user.user_id,
        company_id = input.company_id,
        creator_id = input.creator_id,
        force = input.force_regenerate,
        "Video generation requested",
    );

    let request = GenerationRequest {
        company_id: input.company_id,
        user_id: auth_user.user_id,
        creator_id: input.creator_id,
        brief: VideoBrief {
            company_name: input.company_name,
            use_case: input.use_case,
            founder_name: input.founder_name,
            founder_role: input.founder_role,
            interesting_context: input.interesting_context,
        },
        force_regenerate: input.force_regenerate,
    };

    let outcome = state.coordinator.request_generation(request).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/videos/creator/{creator_id}
///
/// `creator_id` is the local catalog id.
pub async fn list_for_creator(
    State(state): State<AppState>,
    Path(creator_id): Path<String>,
) -> AppResult<Json<DataResponse<CreatorFeed>>> {
    let feed = state
        .coordinator
        .list_artifacts_for_creator(&creator_id)
        .await?;
    Ok(Json(DataResponse { data: feed }))
}

/// GET /api/v1/videos/remote
pub async fn list_remote_videos(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<RemoteVideo>>>> {
    let origin = state.video_agent.origin().to_string();
    let videos = state
        .video_agent
        .videos(None)
        .await?
        .into_iter()
        .map(|video| RemoteVideo {
            video_url: normalize_media_url(&origin, &video.video_url),
            ..video
        })
        .collect();
    Ok(Json(DataResponse { data: videos }))
}
