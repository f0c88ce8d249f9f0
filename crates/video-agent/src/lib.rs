//! REST client for the video agent, the external service that renders
//! founder videos.
//!
//! - [`api`] -- the HTTP client and its error type.
//! - [`messages`] -- request/response payloads as the agent speaks them.

pub mod api;
pub mod messages;

pub use api::{VideoAgentApi, VideoAgentError};
