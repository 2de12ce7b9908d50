#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Isolated, migrated in-memory database for one test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
