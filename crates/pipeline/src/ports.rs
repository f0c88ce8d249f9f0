//! Collaborator traits for the coordinator and their production adapters.

use async_trait::async_trait;
use foundercast_core::types::{DbId, ExternalCreatorId};
use foundercast_db::models::post::{CreateGeneratedPost, Post, PostWithCompany};
use foundercast_db::repositories::{CompanyRepo, PostRepo};
use foundercast_db::DbPool;
use foundercast_video_agent::messages::{
    GenerateRequest, GenerateResponse, RemoteCreator, RemoteVideo,
};
use foundercast_video_agent::{VideoAgentApi, VideoAgentError};

/// Persistence needed by the coordinator.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Owner of a company, or `None` if the company does not exist.
    async fn company_owner(&self, company_id: DbId) -> Result<Option<DbId>, sqlx::Error>;

    /// Most recent generated video in a (company, creator, user) slot.
    async fn latest_video(
        &self,
        company_id: DbId,
        creator_id: &str,
        user_id: DbId,
    ) -> Result<Option<Post>, sqlx::Error>;

    /// Persist a generated video and retire every other video in its slot.
    async fn replace_video(&self, input: &CreateGeneratedPost) -> Result<Post, sqlx::Error>;

    /// All generated videos for a creator, newest first.
    async fn videos_for_creator(
        &self,
        creator_id: &str,
    ) -> Result<Vec<PostWithCompany>, sqlx::Error>;
}

/// The external video agent as seen by the coordinator.
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Origin that relative media paths are resolved against.
    fn origin(&self) -> &str;

    async fn generate(&self, request: &GenerateRequest)
        -> Result<GenerateResponse, VideoAgentError>;

    async fn creators(&self) -> Result<Vec<RemoteCreator>, VideoAgentError>;

    async fn videos(
        &self,
        creator_id: Option<ExternalCreatorId>,
    ) -> Result<Vec<RemoteVideo>, VideoAgentError>;
}

// ---------------------------------------------------------------------------
// Production adapters
// ---------------------------------------------------------------------------

/// [`GenerationStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgGenerationStore {
    pool: DbPool,
}

impl PgGenerationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationStore for PgGenerationStore {
    async fn company_owner(&self, company_id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        CompanyRepo::find_owner(&self.pool, company_id).await
    }

    async fn latest_video(
        &self,
        company_id: DbId,
        creator_id: &str,
        user_id: DbId,
    ) -> Result<Option<Post>, sqlx::Error> {
        PostRepo::find_latest_generated(&self.pool, company_id, creator_id, user_id).await
    }

    async fn replace_video(&self, input: &CreateGeneratedPost) -> Result<Post, sqlx::Error> {
        let (post, _retired) = PostRepo::create_generated_replacing(&self.pool, input).await?;
        Ok(post)
    }

    async fn videos_for_creator(
        &self,
        creator_id: &str,
    ) -> Result<Vec<PostWithCompany>, sqlx::Error> {
        PostRepo::list_generated_by_creator(&self.pool, creator_id).await
    }
}

#[async_trait]
impl VideoService for VideoAgentApi {
    fn origin(&self) -> &str {
        self.api_url()
    }

    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, VideoAgentError> {
        VideoAgentApi::generate(self, request).await
    }

    async fn creators(&self) -> Result<Vec<RemoteCreator>, VideoAgentError> {
        VideoAgentApi::creators(self).await
    }

    async fn videos(
        &self,
        creator_id: Option<ExternalCreatorId>,
    ) -> Result<Vec<RemoteVideo>, VideoAgentError> {
        VideoAgentApi::videos(self, creator_id).await
    }
}
