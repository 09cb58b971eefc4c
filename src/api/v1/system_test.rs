//! Tests for system endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::WHOIAM;
use crate::api::{AppState, routes};
use crate::db::SqliteDatabase;

async fn test_app(enable_docs: bool) -> axum::Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    routes::create_router(AppState::new(db), enable_docs)
}

#[tokio::test(flavor = "multi_thread")]
async fn whoiam_returns_plain_text_identifier() {
    let app = test_app(false).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/whoiam")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], WHOIAM.as_bytes());
}

#[tokio::test(flavor = "multi_thread")]
async fn docs_are_only_mounted_when_enabled() {
    let request = || Request::builder().uri("/docs").body(Body::empty()).unwrap();

    let response = test_app(false).await.oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = test_app(true).await.oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
