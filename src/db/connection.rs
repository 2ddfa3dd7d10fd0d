use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Opens the store and makes sure the `notes` table exists.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
        .await?;

    info!("syncing database schema from entities");
    db.get_schema_registry("notes_server::db::entities::*")
        .sync(&db)
        .await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::connect;
    use crate::{config::DatabaseConfig, db::entities::prelude::Note};

    #[tokio::test]
    async fn creates_notes_table_on_fresh_database() {
        let db = connect(&DatabaseConfig::with_url("sqlite::memory:"))
            .await
            .expect("in-memory sqlite should open");

        let count = Note::find()
            .count(&db)
            .await
            .expect("notes table should exist after connect");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn fails_when_database_cannot_be_opened() {
        let missing = std::env::temp_dir()
            .join("notes-server-missing-dir")
            .join("nested")
            .join("notes.db");
        let url = format!("sqlite://{}?mode=rw", missing.display());

        assert!(connect(&DatabaseConfig::with_url(url)).await.is_err());
    }
}
