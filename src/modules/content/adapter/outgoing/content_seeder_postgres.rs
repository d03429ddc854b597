use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use crate::modules::content::application::fallback::FallbackDataset;
use crate::modules::content::application::ports::outgoing::{
    ContentSeeder, ContentSeederError, SeedSummary,
};

use super::sea_orm_entity::{experiences, personal_info, projects, skills};

/// Tables whose serial sequences must be advanced past explicitly seeded ids.
const SERIAL_TABLES: [&str; 3] = ["experiences", "projects", "skills"];

#[derive(Debug, Clone)]
pub struct ContentSeederPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentSeederPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

async fn wipe(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    contact_messages::Entity::delete_many().exec(txn).await?;
    skills::Entity::delete_many().exec(txn).await?;
    projects::Entity::delete_many().exec(txn).await?;
    experiences::Entity::delete_many().exec(txn).await?;
    personal_info::Entity::delete_many().exec(txn).await?;
    Ok(())
}

async fn populate(
    txn: &DatabaseTransaction,
    dataset: &FallbackDataset,
) -> Result<SeedSummary, DbErr> {
    let mut summary = SeedSummary::default();

    if let Some(info) = &dataset.personal_info {
        personal_info::Entity::insert(personal_info::ActiveModel::from(info))
            .exec_without_returning(txn)
            .await?;
        summary.personal_info = 1;
    }

    if !dataset.experiences.is_empty() {
        summary.experiences = experiences::Entity::insert_many(
            dataset.experiences.iter().map(experiences::ActiveModel::from),
        )
        .exec_without_returning(txn)
        .await?;
    }

    if !dataset.projects.is_empty() {
        summary.projects =
            projects::Entity::insert_many(dataset.projects.iter().map(projects::ActiveModel::from))
                .exec_without_returning(txn)
                .await?;
    }

    if !dataset.skills.is_empty() {
        summary.skills =
            skills::Entity::insert_many(dataset.skills.iter().map(skills::ActiveModel::from))
                .exec_without_returning(txn)
                .await?;
    }

    Ok(summary)
}

/// Postgres only: next generated id continues after the highest seeded one.
async fn advance_sequences(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    if txn.get_database_backend() != DatabaseBackend::Postgres {
        return Ok(());
    }

    for table in SERIAL_TABLES {
        let sql = format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
             COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        );
        txn.execute(Statement::from_string(DatabaseBackend::Postgres, sql))
            .await?;
    }

    Ok(())
}

#[async_trait]
impl ContentSeeder for ContentSeederPostgres {
    async fn reseed(&self, dataset: &FallbackDataset) -> Result<SeedSummary, ContentSeederError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ContentSeederError::TransactionFailed(e.to_string()))?;

        let result = async {
            wipe(&txn).await?;
            let summary = populate(&txn, dataset).await?;
            advance_sequences(&txn).await?;
            Ok::<_, DbErr>(summary)
        }
        .await;

        match result {
            Ok(summary) => {
                txn.commit()
                    .await
                    .map_err(|e| ContentSeederError::TransactionFailed(e.to_string()))?;
                Ok(summary)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "Rollback after failed seed also failed");
                }
                Err(ContentSeederError::DatabaseError(err.to_string()))
            }
        }
    }
}
