//! HTTP error translation.
//!
//! Every failure leaving a handler is one of three tagged kinds, each with
//! its own status code. The body is always `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Entity not found: Project with id '1'")]
    pub error: String,
}

/// Handler-level error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The addressed row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request was well-formed HTTP but its content is unusable.
    #[error("{0}")]
    InvalidInput(String),

    /// The store failed underneath the request.
    #[error("{0}")]
    StoreFailure(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            DbError::Validation { .. } | DbError::Constraint { .. } => {
                ApiError::InvalidInput(e.to_string())
            }
            DbError::Database { .. } | DbError::Migration { .. } | DbError::Connection { .. } => {
                ApiError::StoreFailure(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::StoreFailure(message) => error!(%status, %message, "request failed"),
            _ => warn!(%status, message = %self, "request rejected"),
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
