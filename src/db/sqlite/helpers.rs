//! Shared helper functions for SQLite repositories.

use sqlx::error::ErrorKind;

use crate::db::DbError;

/// Translate a SQLx error, singling out constraint violations.
pub fn to_db_error(e: sqlx::Error) -> DbError {
    match &e {
        sqlx::Error::Database(db_err) if !matches!(db_err.kind(), ErrorKind::Other) => {
            DbError::Constraint {
                message: db_err.message().to_string(),
            }
        }
        _ => DbError::Database {
            message: e.to_string(),
        },
    }
}
