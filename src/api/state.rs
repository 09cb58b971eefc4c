//! Application state for the API server.

use std::sync::Arc;

use crate::db::SqliteDatabase;

/// Shared application state.
///
/// Holds the database; every request begins its own transaction on it.
#[derive(Clone)]
pub struct AppState {
    db: Arc<SqliteDatabase>,
}

impl AppState {
    /// Create a new AppState around the given database.
    pub fn new(db: SqliteDatabase) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &SqliteDatabase {
        &self.db
    }
}
