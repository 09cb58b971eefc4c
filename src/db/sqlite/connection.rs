//! SQLite connection pool, schema bootstrap and per-request transactions.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use tracing::debug;

use super::helpers::to_db_error;
use super::{SqliteProjectRepository, SqliteTaskRepository};
use crate::db::{DbError, DbResult};

// Embed migrations from data/sql/sqlite/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("data/sql/sqlite");

/// How long a writer waits for the database lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite database backed by a SQLx connection pool.
///
/// Foreign-key enforcement is left off: deleting a project keeps its tasks
/// readable, and task creation checks the parent itself.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (or create) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every pooled connection would get its own empty database, so the pool
    /// is pinned to a single connection that never expires.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `projects` and `tasks` tables if they are missing.
    pub async fn migrate(&self) -> DbResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    /// Begin a read transaction scoped to one unit of work.
    pub async fn begin(&self) -> DbResult<DataStore> {
        let tx = self.pool.begin().await.map_err(to_db_error)?;
        Ok(DataStore { tx })
    }

    /// Begin a transaction that will write.
    ///
    /// Takes the write lock up front (`BEGIN IMMEDIATE`), so concurrent
    /// writers queue on the busy timeout instead of failing when a read
    /// lock cannot be upgraded.
    pub async fn begin_write(&self) -> DbResult<DataStore> {
        let tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(to_db_error)?;
        Ok(DataStore { tx })
    }
}

/// One open transaction.
///
/// Writes made through [`DataStore::projects`] and [`DataStore::tasks`] only
/// become visible after [`DataStore::commit`]. Dropping the store without
/// committing rolls everything back.
pub struct DataStore {
    tx: Transaction<'static, Sqlite>,
}

impl DataStore {
    /// Project repository bound to this transaction.
    pub fn projects(&mut self) -> SqliteProjectRepository<'_> {
        SqliteProjectRepository { conn: &mut *self.tx }
    }

    /// Task repository bound to this transaction.
    pub fn tasks(&mut self) -> SqliteTaskRepository<'_> {
        SqliteTaskRepository { conn: &mut *self.tx }
    }

    /// Persist all pending writes.
    pub async fn commit(self) -> DbResult<()> {
        self.tx.commit().await.map_err(to_db_error)?;
        debug!("transaction committed");
        Ok(())
    }

    /// Discard all pending writes.
    pub async fn rollback(self) -> DbResult<()> {
        self.tx.rollback().await.map_err(to_db_error)
    }
}
