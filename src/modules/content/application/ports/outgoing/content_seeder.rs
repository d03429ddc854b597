use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::fallback::FallbackDataset;

/// Rows written by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub personal_info: u64,
    pub experiences: u64,
    pub projects: u64,
    pub skills: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentSeederError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

#[async_trait]
pub trait ContentSeeder: Send + Sync {
    /// Replace all stored content with `dataset` in one transaction.
    ///
    /// Contact messages are wiped too. On error nothing is changed.
    async fn reseed(&self, dataset: &FallbackDataset) -> Result<SeedSummary, ContentSeederError>;
}
