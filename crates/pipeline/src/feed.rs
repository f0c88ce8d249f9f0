//! The merged per-creator video feed.
//!
//! Local generated videos and videos the agent reports on its own are
//! reshaped into one [`FeedItem`] type and ordered newest first.

use foundercast_core::media::normalize_media_url;
use foundercast_core::types::{CreatorId, DbId, Timestamp};
use foundercast_db::models::post::PostWithCompany;
use foundercast_video_agent::messages::RemoteVideo;
use serde::Serialize;

/// Where a feed item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSource {
    Local,
    Remote,
}

/// Whether the agent's listing made it into the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteStatus {
    /// Agent videos were fetched and merged.
    Merged,
    /// The agent could not be reached; the feed holds local videos only.
    Unavailable,
    /// The creator has no agent-side id, so there was nothing to fetch.
    Unmapped,
}

/// One video in a creator feed.
///
/// Remote items have no owning user or company on this side, so those ids
/// are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub id: String,
    pub source: FeedSource,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub creator_id: CreatorId,
    pub company_id: Option<DbId>,
    pub company_name: String,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Feed returned by [`crate::VideoCoordinator::list_artifacts_for_creator`].
#[derive(Debug, Clone, Serialize)]
pub struct CreatorFeed {
    pub items: Vec<FeedItem>,
    pub remote: RemoteStatus,
}

impl FeedItem {
    pub fn from_local(row: PostWithCompany, creator_id: &str) -> Self {
        let post = row.post;
        Self {
            id: post.id.to_string(),
            source: FeedSource::Local,
            title: post.title,
            description: post.description,
            video_url: post.video_url,
            creator_id: post.creator_id.unwrap_or_else(|| creator_id.to_string()),
            company_id: Some(post.company_id),
            company_name: row.company_name,
            user_id: Some(post.user_id),
            created_at: post.created_at,
        }
    }

    /// Reshape an agent-reported video. Returns `None` when its timestamp
    /// cannot be parsed, since it could not be placed in the ordering.
    pub fn from_remote(video: RemoteVideo, creator_id: &str, origin: &str) -> Option<Self> {
        let created_at = video.created_at_utc()?;
        Some(Self {
            id: format!("remote-{}", video.id),
            source: FeedSource::Remote,
            title: format!(
                "Generated Video: {} by {}",
                video.company_name, video.founder_name
            ),
            description: Some(format!("Video generated for {}", video.company_name)),
            video_url: Some(normalize_media_url(origin, &video.video_url)),
            creator_id: creator_id.to_string(),
            company_id: None,
            company_name: video.company_name,
            user_id: None,
            created_at,
        })
    }
}

/// Sort items newest first. Ties keep their incoming order, so local items
/// (pushed first) stay ahead of remote ones with the same timestamp.
pub fn sort_newest_first(items: &mut [FeedItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
