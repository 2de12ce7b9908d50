use sea_orm::DatabaseConnection;

/// Handles shared by every request. The pool hands each handler its own connection.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}
