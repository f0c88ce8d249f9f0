//! Founder-video generation pipeline.
//!
//! [`coordinator::VideoCoordinator`] decides whether a generation request can
//! be served from a stored video or needs a fresh render from the video
//! agent, keeps one live video per (company, creator, user) slot, and merges
//! local and agent-reported videos into a single creator feed.
//!
//! The coordinator talks to its collaborators through the traits in
//! [`ports`], so it can run against PostgreSQL and the real agent in
//! production and against in-memory fakes in tests.

pub mod coordinator;
pub mod error;
pub mod feed;
pub mod ports;

pub use coordinator::{GenerationOutcome, GenerationRequest, VideoCoordinator};
pub use error::GenerationError;
pub use feed::{CreatorFeed, FeedItem, FeedSource, RemoteStatus};
pub use ports::{GenerationStore, PgGenerationStore, VideoService};
