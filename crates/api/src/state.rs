use std::sync::Arc;

use foundercast_core::creators::PresetCreators;
use foundercast_db::DbPool;
use foundercast_llm::PerplexityApi;
use foundercast_pipeline::{PgGenerationStore, VideoCoordinator, VideoService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Generation coordinator (cache check, agent call, slot replacement).
    pub coordinator: Arc<VideoCoordinator>,
    /// Video agent, for the pass-through listing endpoints.
    pub video_agent: Arc<dyn VideoService>,
    /// LLM client; `None` when no API key is configured.
    pub llm: Option<Arc<PerplexityApi>>,
}

impl AppState {
    /// Wire the coordinator against PostgreSQL, the given video agent, and
    /// the preset creator catalog.
    pub fn new(
        pool: DbPool,
        config: ServerConfig,
        video_agent: Arc<dyn VideoService>,
        llm: Option<PerplexityApi>,
    ) -> Self {
        let coordinator = VideoCoordinator::new(
            Arc::new(PgGenerationStore::new(pool.clone())),
            Arc::clone(&video_agent),
            Arc::new(PresetCreators),
        );
        Self {
            pool,
            config: Arc::new(config),
            coordinator: Arc::new(coordinator),
            video_agent,
            llm: llm.map(Arc::new),
        }
    }
}
