//! Generation request coordination.
//!
//! A request is served from the stored video in its (company, creator, user)
//! slot when the brief's fingerprint is unchanged. Otherwise the video agent
//! renders a new one, which replaces whatever the slot held before. A failed
//! render leaves the slot untouched.

use std::sync::Arc;

use foundercast_core::creators::CreatorDirectory;
use foundercast_core::error::CoreError;
use foundercast_core::fingerprint::{ContentFingerprint, VideoBrief};
use foundercast_core::media::normalize_media_url;
use foundercast_core::types::{DbId, ExternalCreatorId};
use foundercast_core::validation::require_non_blank;
use foundercast_db::models::post::{CreateGeneratedPost, Post};
use foundercast_video_agent::messages::GenerateRequest;
use serde::Serialize;

use crate::error::GenerationError;
use crate::feed::{sort_newest_first, CreatorFeed, FeedItem, RemoteStatus};
use crate::ports::{GenerationStore, VideoService};

const CACHED_MESSAGE: &str = "Using cached video";
const GENERATED_MESSAGE: &str = "Video generated successfully";
const COMPLETED: &str = "completed";

/// A request to produce (or reuse) a founder video.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub company_id: DbId,
    pub user_id: DbId,
    /// Creator id in the video agent's numbering.
    pub creator_id: ExternalCreatorId,
    pub brief: VideoBrief,
    pub force_regenerate: bool,
}

/// Result of [`VideoCoordinator::request_generation`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub message: String,
    pub status: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub post_id: DbId,
    pub cached: bool,
    pub input: VideoBrief,
}

impl GenerationOutcome {
    fn cached(post: &Post, video_url: String, brief: VideoBrief) -> Self {
        Self {
            message: CACHED_MESSAGE.to_string(),
            status: COMPLETED.to_string(),
            video_url,
            video_id: None,
            post_id: post.id,
            cached: true,
            input: brief,
        }
    }
}

/// Coordinates video generation between the store and the video agent.
#[derive(Clone)]
pub struct VideoCoordinator {
    store: Arc<dyn GenerationStore>,
    agent: Arc<dyn VideoService>,
    creators: Arc<dyn CreatorDirectory>,
}

impl VideoCoordinator {
    pub fn new(
        store: Arc<dyn GenerationStore>,
        agent: Arc<dyn VideoService>,
        creators: Arc<dyn CreatorDirectory>,
    ) -> Self {
        Self {
            store,
            agent,
            creators,
        }
    }

    /// Serve a generation request, reusing the stored video when the brief
    /// is unchanged and `force_regenerate` is not set.
    pub async fn request_generation(
        &self,
        req: GenerationRequest,
    ) -> Result<GenerationOutcome, GenerationError> {
        let owner = self.store.company_owner(req.company_id).await?;
        if owner != Some(req.user_id) {
            return Err(GenerationError::Authorization(format!(
                "company {} is not owned by user {}",
                req.company_id, req.user_id
            )));
        }

        let creator_id = self.creators.to_local(req.creator_id).ok_or_else(|| {
            GenerationError::InvalidInput(format!("Invalid creator_id: {}", req.creator_id))
        })?;

        validate_brief(&req.brief)?;
        let fingerprint = req.brief.fingerprint();

        if !req.force_regenerate {
            let existing = self
                .store
                .latest_video(req.company_id, &creator_id, req.user_id)
                .await?;
            if let Some(post) = existing {
                let fresh = post
                    .content_fingerprint
                    .clone()
                    .map(ContentFingerprint::from_stored)
                    .is_some_and(|stored| stored == fingerprint);
                match post.video_url.clone() {
                    Some(url) if fresh => {
                        tracing::info!(
                            post_id = post.id,
                            company_id = req.company_id,
                            creator_id = %creator_id,
                            "Serving cached video",
                        );
                        return Ok(GenerationOutcome::cached(&post, url, req.brief));
                    }
                    _ => {
                        tracing::debug!(
                            post_id = post.id,
                            company_id = req.company_id,
                            creator_id = %creator_id,
                            "Stored video is stale, regenerating",
                        );
                    }
                }
            }
        }

        let agent_request = GenerateRequest {
            company_name: req.brief.company_name.clone(),
            use_case: req.brief.use_case.clone(),
            founder_name: req.brief.founder_name.clone(),
            founder_role: req.brief.founder_role.clone(),
            interesting_context: req.brief.interesting_context.clone(),
            creator_id: req.creator_id,
        };

        let response = self.agent.generate(&agent_request).await.map_err(|e| {
            tracing::error!(error = %e, company_id = req.company_id, "Video agent call failed");
            GenerationError::GenerationFailed {
                message: e.upstream_message(),
            }
        })?;

        if response.reports_failure() {
            let message = response
                .error
                .clone()
                .filter(|e| !e.trim().is_empty())
                .or_else(|| Some(response.message.clone()).filter(|m| !m.trim().is_empty()))
                .unwrap_or_else(|| "Video generation failed".to_string());
            tracing::warn!(company_id = req.company_id, %message, "Video agent reported failure");
            return Err(GenerationError::GenerationFailed { message });
        }

        let raw_url = response
            .usable_video_url()
            .ok_or_else(|| GenerationError::GenerationFailed {
                message: "No video URL returned from video agent".to_string(),
            })?;
        let video_url = normalize_media_url(self.agent.origin(), raw_url);

        let brief = &req.brief;
        let mut description = format!(
            "Video generated for {}. Use case: {}",
            brief.company_name, brief.use_case
        );
        if !brief.interesting_context.trim().is_empty() {
            description.push_str(". ");
            description.push_str(&brief.interesting_context);
        }

        let post = self
            .store
            .replace_video(&CreateGeneratedPost {
                user_id: req.user_id,
                company_id: req.company_id,
                creator_id: creator_id.clone(),
                title: format!(
                    "Generated Video: {} by {}",
                    brief.company_name, brief.founder_name
                ),
                description,
                video_url: video_url.clone(),
                content_fingerprint: fingerprint.into_inner(),
            })
            .await?;

        tracing::info!(
            post_id = post.id,
            company_id = req.company_id,
            creator_id = %creator_id,
            "Stored generated video",
        );

        Ok(GenerationOutcome {
            message: Some(response.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERATED_MESSAGE.to_string()),
            status: Some(response.status)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| COMPLETED.to_string()),
            video_url,
            video_id: response.video_id,
            post_id: post.id,
            cached: false,
            input: req.brief,
        })
    }

    /// Every video for a creator: stored ones from all users plus those the
    /// video agent knows about, newest first.
    ///
    /// An unreachable agent degrades to local results only; the outcome is
    /// reported in [`CreatorFeed::remote`].
    pub async fn list_artifacts_for_creator(
        &self,
        creator_id: &str,
    ) -> Result<CreatorFeed, GenerationError> {
        let mut items: Vec<FeedItem> = self
            .store
            .videos_for_creator(creator_id)
            .await?
            .into_iter()
            .map(|row| FeedItem::from_local(row, creator_id))
            .collect();

        let remote = match self.creators.to_external(creator_id) {
            None => RemoteStatus::Unmapped,
            Some(external) => match self.agent.videos(Some(external)).await {
                Ok(videos) => {
                    let origin = self.agent.origin();
                    for video in videos {
                        let video_id = video.id.clone();
                        match FeedItem::from_remote(video, creator_id, origin) {
                            Some(item) => items.push(item),
                            None => tracing::warn!(
                                video_id = %video_id,
                                "Skipping remote video with unparseable created_at",
                            ),
                        }
                    }
                    RemoteStatus::Merged
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        creator_id,
                        "Failed to fetch videos from video agent, returning local only",
                    );
                    RemoteStatus::Unavailable
                }
            },
        };

        sort_newest_first(&mut items);
        Ok(CreatorFeed { items, remote })
    }
}

fn validate_brief(brief: &VideoBrief) -> Result<(), GenerationError> {
    let checks = [
        ("company_name", &brief.company_name),
        ("use_case", &brief.use_case),
        ("founder_name", &brief.founder_name),
        ("founder_role", &brief.founder_role),
    ];
    for (field, value) in checks {
        require_non_blank(field, value).map_err(|e| match e {
            CoreError::Validation(msg) => GenerationError::InvalidInput(msg),
            other => GenerationError::InvalidInput(other.to_string()),
        })?;
    }
    Ok(())
}
