use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    routes::app,
    state::AppState,
};

/// Fresh private in-memory store with the `notes` table created.
pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    connection::connect(&DatabaseConfig::with_url("sqlite::memory:")).await
}

/// Full application (router plus middleware) over the given connection.
pub fn test_app(db: DatabaseConnection) -> Router {
    let state: Arc<AppState> = AppState::new(AppConfig::default(), db);
    app(state)
}
