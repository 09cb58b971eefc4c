//! Database error types.
//!
//! Uses miette for diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(taskpad::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(taskpad::db::validation_error))]
    Validation { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(taskpad::db::constraint))]
    Constraint { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(taskpad::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(taskpad::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(taskpad::db::connection_error))]
    Connection { message: String },
}

impl DbError {
    /// Shorthand for a missing project row.
    pub fn project_not_found(p_id: i64) -> Self {
        Self::NotFound {
            entity_type: "Project".to_string(),
            id: p_id.to_string(),
        }
    }

    /// Shorthand for a missing task row.
    pub fn task_not_found(t_id: i64) -> Self {
        Self::NotFound {
            entity_type: "Task".to_string(),
            id: t_id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
