use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory SQLite database with every migration applied.
///
/// A single pooled connection, so the database lives as long as the handle.
pub async fn migrated_sqlite() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory SQLite");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations on SQLite");

    Arc::new(db)
}
