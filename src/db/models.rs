//! Domain models for the taskpad database.
//!
//! These models are storage-agnostic and mirror the `projects` and `tasks`
//! tables column for column.

use serde::{Deserialize, Serialize};

/// Priority assigned to every freshly created task.
pub const DEFAULT_TASK_PRIORITY: i64 = 1;

/// Format of `Task::t_date`.
pub const TASK_DATE_FORMAT: &str = "%Y-%m-%d";

/// A project groups tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub p_id: i64,
    pub p_name: String,
}

/// Insert payload for a project; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub p_name: String,
}

/// A task belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub t_id: i64,
    pub p_id: i64,
    pub t_subject: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub t_date: String,
    pub t_priority: i64,
    pub t_comments: String,
}

/// Insert payload for a task; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub p_id: i64,
    pub t_subject: String,
    pub t_date: String,
    pub t_priority: i64,
    pub t_comments: String,
}

impl NewTask {
    /// Task as created through the API: dated `today`, default priority,
    /// no comments.
    pub fn with_defaults(p_id: i64, t_subject: impl Into<String>, today: impl Into<String>) -> Self {
        Self {
            p_id,
            t_subject: t_subject.into(),
            t_date: today.into(),
            t_priority: DEFAULT_TASK_PRIORITY,
            t_comments: String::new(),
        }
    }
}
