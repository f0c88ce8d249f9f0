//! Post model and DTOs.
//!
//! A post with a `creator_id` is a generated founder video; its
//! `content_fingerprint` identifies the brief it was generated from.

use foundercast_core::types::{CreatorId, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub user_id: DbId,
    pub company_id: DbId,
    pub creator_id: Option<CreatorId>,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    #[serde(skip_serializing)]
    pub content_fingerprint: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post joined with the name of the company it belongs to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostWithCompany {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: Post,
    pub company_name: String,
}

/// DTO for a hand-written post. Owner and company come from the session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for persisting a generated founder video.
#[derive(Debug, Clone)]
pub struct CreateGeneratedPost {
    pub user_id: DbId,
    pub company_id: DbId,
    pub creator_id: CreatorId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub content_fingerprint: String,
}
