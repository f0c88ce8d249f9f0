/// Errors produced by [`crate::VideoCoordinator`].
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The company does not exist or is not owned by the caller.
    #[error("Company not found or unauthorized: {0}")]
    Authorization(String),

    /// Unmapped creator id or malformed brief.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The video agent failed or returned no usable media reference.
    #[error("Video generation failed: {message}")]
    GenerationFailed { message: String },

    /// The local store failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
