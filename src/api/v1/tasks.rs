//! Task management handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::require_text;
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::utils::{current_date, is_valid_date};
use crate::db::{DbError, NewTask, Task, TaskRepository};

// =============================================================================
// DTOs
// =============================================================================

/// Task response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    /// Generated identifier
    #[schema(example = 1)]
    pub t_id: i64,
    /// Owning project
    #[schema(example = 1)]
    pub p_id: i64,
    /// What the task is about
    #[schema(example = "Buy milk")]
    pub t_subject: String,
    /// Calendar date (YYYY-MM-DD)
    #[schema(example = "2025-01-31")]
    pub t_date: String,
    /// Priority, 1 for new tasks
    #[schema(example = 1)]
    pub t_priority: i64,
    /// Free-form comments
    #[schema(example = "")]
    pub t_comments: String,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            t_id: t.t_id,
            p_id: t.p_id,
            t_subject: t.t_subject,
            t_date: t.t_date,
            t_priority: t.t_priority,
            t_comments: t.t_comments,
        }
    }
}

/// Create task request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    /// What the task is about
    #[schema(example = "Buy milk")]
    pub t_subject: String,
}

/// Full task record as sent by clients on update.
///
/// Only the fields below are read. `t_id` and `p_id` may be present in the
/// body but are ignored: the path names the task and the parent project
/// never changes. Any other key is ignored as well.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    /// New subject, must not be blank
    #[schema(example = "Buy oat milk")]
    pub t_subject: String,
    /// New date (YYYY-MM-DD)
    #[schema(example = "2025-02-01")]
    pub t_date: String,
    /// New priority
    #[schema(example = 2)]
    pub t_priority: i64,
    /// New comments
    #[schema(example = "the barista kind")]
    pub t_comments: String,
}

impl UpdateTaskRequest {
    /// Reject a blank subject or a malformed date.
    fn validate(self) -> Result<Self, ApiError> {
        if !is_valid_date(&self.t_date) {
            return Err(ApiError::InvalidInput(format!(
                "t_date '{}' is not a YYYY-MM-DD date",
                self.t_date
            )));
        }
        Ok(Self {
            t_subject: require_text("t_subject", self.t_subject)?,
            ..self
        })
    }

    fn apply_to(self, target: &mut Task) {
        target.t_subject = self.t_subject;
        target.t_date = self.t_date;
        target.t_priority = self.t_priority;
        target.t_comments = self.t_comments;
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List the tasks of a project
#[utoipa::path(
    get,
    path = "/api/projects/{p_id}/tasks",
    tag = "tasks",
    params(
        ("p_id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Tasks of the project ordered by id", body = Vec<TaskResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_project_tasks(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let Path(p_id) = path?;

    let mut store = state.db().begin().await?;
    let tasks = store.tasks().list_by_project(p_id).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Create a task in a project
///
/// The task is dated today with priority 1 and no comments.
#[utoipa::path(
    post,
    path = "/api/projects/{p_id}/tasks",
    tag = "tasks",
    params(
        ("p_id" = i64, Path, description = "Project ID")
    ),
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let Path(p_id) = path?;
    let Json(req) = payload?;
    let t_subject = require_text("t_subject", req.t_subject)?;

    let mut store = state.db().begin_write().await?;
    let task = store
        .tasks()
        .create(&NewTask::with_defaults(p_id, t_subject, current_date()))
        .await?;
    store.commit().await?;

    debug!(t_id = task.t_id, p_id, "task created");
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/api/tasks/{t_id}",
    tag = "tasks",
    params(
        ("t_id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Path(t_id) = path?;

    let mut store = state.db().begin().await?;
    let task = store.tasks().get(t_id).await?;

    Ok(Json(TaskResponse::from(task)))
}

/// Update a task
///
/// Overwrites subject, date, priority and comments. Updating an unknown id
/// changes nothing and still succeeds.
#[utoipa::path(
    put,
    path = "/api/tasks/{t_id}",
    tag = "tasks",
    params(
        ("t_id" = i64, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated"),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(t_id) = path?;
    let Json(req) = payload?;
    let req = req.validate()?;

    let mut store = state.db().begin_write().await?;
    let mut task = match store.tasks().get(t_id).await {
        Ok(task) => task,
        Err(DbError::NotFound { .. }) => {
            debug!(t_id, "update matched no task");
            return Ok(StatusCode::OK);
        }
        Err(e) => return Err(e.into()),
    };

    req.apply_to(&mut task);
    store.tasks().update(&task).await?;
    store.commit().await?;

    Ok(StatusCode::OK)
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{t_id}",
    tag = "tasks",
    params(
        ("t_id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(t_id) = path?;

    let mut store = state.db().begin_write().await?;
    let matched = store.tasks().delete(t_id).await?;
    store.commit().await?;

    if !matched {
        debug!(t_id, "delete matched no task");
    }
    Ok(StatusCode::NO_CONTENT)
}
