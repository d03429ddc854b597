use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::{ContentSeederError, SeedSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedContentError {
    #[error("Seeding failed: {0}")]
    SeedFailed(String),
}

impl From<ContentSeederError> for SeedContentError {
    fn from(err: ContentSeederError) -> Self {
        SeedContentError::SeedFailed(err.to_string())
    }
}

/// Wipe the store and write the built-in dataset.
#[async_trait]
pub trait SeedContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedSummary, SeedContentError>;
}
