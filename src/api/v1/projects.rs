//! Project management handlers.

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
use crate::db::{NewProject, Project, ProjectRepository};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Project response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    /// Generated identifier
    #[schema(example = 1)]
    pub p_id: i64,
    /// Project name
    #[schema(example = "Demo")]
    pub p_name: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            p_id: p.p_id,
            p_name: p.p_name,
        }
    }
}

/// Create/update project request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectRequest {
    /// Project name
    #[schema(example = "Demo")]
    pub p_name: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects ordered by id", body = Vec<ProjectResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let mut store = state.db().begin().await?;
    let projects = store.projects().list().await?;

    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let Json(req) = payload?;
    let p_name = require_text("p_name", req.p_name)?;

    let mut store = state.db().begin_write().await?;
    let project = store.projects().create(&NewProject { p_name }).await?;
    store.commit().await?;

    debug!(p_id = project.p_id, "project created");
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/api/projects/{p_id}",
    tag = "projects",
    params(
        ("p_id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let Path(p_id) = path?;

    let mut store = state.db().begin().await?;
    let project = store.projects().get(p_id).await?;

    Ok(Json(ProjectResponse::from(project)))
}

/// Rename a project
///
/// Updating an unknown id changes nothing and still succeeds.
#[utoipa::path(
    put,
    path = "/api/projects/{p_id}",
    tag = "projects",
    params(
        ("p_id" = i64, Path, description = "Project ID")
    ),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project updated"),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_project(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(p_id) = path?;
    let Json(req) = payload?;
    let p_name = require_text("p_name", req.p_name)?;

    let mut store = state.db().begin_write().await?;
    let matched = store.projects().update(&Project { p_id, p_name }).await?;
    store.commit().await?;

    if !matched {
        debug!(p_id, "update matched no project");
    }
    Ok(StatusCode::OK)
}

/// Delete a project
///
/// Tasks of the project are kept. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/api/projects/{p_id}",
    tag = "projects",
    params(
        ("p_id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(p_id) = path?;

    let mut store = state.db().begin_write().await?;
    let matched = store.projects().delete(p_id).await?;
    store.commit().await?;

    if !matched {
        debug!(p_id, "delete matched no project");
    }
    Ok(StatusCode::NO_CONTENT)
}
