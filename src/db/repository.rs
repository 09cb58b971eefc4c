//! Repository traits for data access abstraction.
//!
//! These traits define the contract for the data-access objects. Every
//! implementation operates inside a caller-owned transaction, so nothing
//! written here is visible to other requests until the caller commits.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewProject, NewTask, Project, Task},
};

/// Repository for Project operations.
pub trait ProjectRepository {
    /// List all projects ordered by id.
    fn list(&mut self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    /// Insert a project and return it with its generated id.
    fn create(&mut self, project: &NewProject) -> impl Future<Output = DbResult<Project>> + Send;

    /// Get a project by id.
    ///
    /// Fails with `DbError::NotFound` when no row matches.
    fn get(&mut self, p_id: i64) -> impl Future<Output = DbResult<Project>> + Send;

    /// Rename a project. Returns `false` when no row matched.
    fn update(&mut self, project: &Project) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a project by id. Tasks of the project are left in place.
    /// Returns `false` when no row matched.
    fn delete(&mut self, p_id: i64) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for Task operations.
pub trait TaskRepository {
    /// List the tasks of one project ordered by id.
    fn list_by_project(&mut self, p_id: i64) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Insert a task and return it with its generated id.
    ///
    /// Fails with `DbError::NotFound` when the parent project does not exist.
    fn create(&mut self, task: &NewTask) -> impl Future<Output = DbResult<Task>> + Send;

    /// Get a task by id.
    fn get(&mut self, t_id: i64) -> impl Future<Output = DbResult<Task>> + Send;

    /// Overwrite the mutable fields (subject, date, priority, comments) of
    /// the row matching `task.t_id`. The parent project is never changed.
    /// Returns `false` when no row matched.
    fn update(&mut self, task: &Task) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a task by id. Returns `false` when no row matched.
    fn delete(&mut self, t_id: i64) -> impl Future<Output = DbResult<bool>> + Send;
}
