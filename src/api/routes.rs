//! API route configuration.

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::state::AppState;
use super::v1::{
    self, CreateTaskRequest, ProjectRequest, ProjectResponse, TaskResponse, UpdateTaskRequest,
};
use super::ErrorResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "taskpad API",
        version = "0.1.0",
        description = "Projects and their tasks over SQLite, no ORM",
        license(name = "GPL-2.0")
    ),
    paths(
        v1::whoiam,
        v1::list_projects,
        v1::create_project,
        v1::get_project,
        v1::update_project,
        v1::delete_project,
        v1::list_project_tasks,
        v1::create_task,
        v1::get_task,
        v1::update_task,
        v1::delete_task,
    ),
    components(
        schemas(
            ProjectResponse,
            ProjectRequest,
            TaskResponse,
            CreateTaskRequest,
            UpdateTaskRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Server identification"),
        (name = "projects", description = "Project management endpoints"),
        (name = "tasks", description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router, optionally with OpenAPI documentation at `/docs`.
pub fn create_router(state: AppState, enable_docs: bool) -> Router {
    let api_routes = Router::new()
        .route("/whoiam", get(v1::whoiam))
        .route(
            "/projects",
            get(v1::list_projects).post(v1::create_project),
        )
        .route(
            "/projects/{p_id}",
            get(v1::get_project)
                .put(v1::update_project)
                .delete(v1::delete_project),
        )
        .route(
            "/projects/{p_id}/tasks",
            get(v1::list_project_tasks).post(v1::create_task),
        )
        .route(
            "/tasks/{t_id}",
            get(v1::get_task)
                .put(v1::update_task)
                .delete(v1::delete_task),
        );

    let mut router = Router::new().nest("/api", api_routes);

    if enable_docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router.with_state(state)
}
