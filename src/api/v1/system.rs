//! System identification handlers.

use tracing::instrument;

/// Identifier reported by `/api/whoiam`.
pub const WHOIAM: &str = "axum, no-orm, sqlite3";

/// Identify the server implementation
#[utoipa::path(
    get,
    path = "/api/whoiam",
    tag = "system",
    responses(
        (status = 200, description = "Plain-text server identifier", body = String, content_type = "text/plain")
    )
)]
#[instrument]
pub async fn whoiam() -> &'static str {
    WHOIAM
}
