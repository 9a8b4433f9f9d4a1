//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Cloning is cheap: the database handle
//! is a reference-counted connection pool.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool used by every service.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
