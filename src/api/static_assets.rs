//! Landing page and static asset serving.
//!
//! `/` serves `<web_root>/index.html`, `/static/*` serves files below
//! `<web_root>/static/`. Missing files answer 404.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Router serving the landing page and the static directory.
pub fn router(web_root: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(web_root.join("index.html")))
        .nest_service("/static", ServeDir::new(web_root.join("static")))
}
