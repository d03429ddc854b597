use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::modules::content::application::fallback::FallbackDataset;
use crate::modules::content::application::ports::incoming::use_cases::{
    SeedContentError, SeedContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentSeeder, SeedSummary};
use crate::modules::settings::application::Settings;

/// Runs the seeding transaction with the dataset built from settings.
///
/// Runs are serialized in-process; a second request waits for the first to
/// finish and then reseeds again.
pub struct SeedContentService<S>
where
    S: ContentSeeder,
{
    seeder: S,
    settings: Arc<Settings>,
    running: Mutex<()>,
}

impl<S> SeedContentService<S>
where
    S: ContentSeeder,
{
    pub fn new(seeder: S, settings: Arc<Settings>) -> Self {
        Self {
            seeder,
            settings,
            running: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<S> SeedContentUseCase for SeedContentService<S>
where
    S: ContentSeeder,
{
    async fn execute(&self) -> Result<SeedSummary, SeedContentError> {
        let _guard = self.running.lock().await;

        let dataset = FallbackDataset::from_settings(&self.settings);

        match self.seeder.reseed(&dataset).await {
            Ok(summary) => {
                info!(
                    experiences = summary.experiences,
                    projects = summary.projects,
                    skills = summary.skills,
                    "Database seeded with fallback content"
                );
                Ok(summary)
            }
            Err(err) => {
                error!(error = %err, "Seeding failed, store left unchanged");
                Err(err.into())
            }
        }
    }
}
