//! Database abstraction layer.
//!
//! Data-access objects issue SQL directly against SQLite; there is no ORM.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Project, Task)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed data store and repositories

mod error;
mod models;
mod repository;
pub mod sqlite;
pub mod utils;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{DataStore, SqliteDatabase};
