//! SQLite implementation of the database traits.
//!
//! This module provides the SQLx-backed data store and the repositories
//! that run inside its transactions.

mod connection;
mod helpers;
mod project;
mod task;

#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod project_test;

pub use connection::{DataStore, SqliteDatabase};
pub use project::SqliteProjectRepository;
pub use task::SqliteTaskRepository;
