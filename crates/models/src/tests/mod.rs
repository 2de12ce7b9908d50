use sea_orm::DatabaseConnection;



/// Derived relation views and cascade behaviour
pub mod relation_tests;

/// Fresh migrated in-memory database per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_in_memory().await
}
