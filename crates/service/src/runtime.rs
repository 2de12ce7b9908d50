//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` and `models::db` so binaries get a
//! ready-to-use database from one call.

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tracing::info;

/// Ensure the database location is usable before connecting.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    common::env::ensure_env(database_url).await
}

/// Connect and, when `auto_migrate` is set, bring the schema up to date.
pub async fn prepare_database(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    ensure_env(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.auto_migrate {
        models::db::migrate(&db).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }
    Ok(db)
}
