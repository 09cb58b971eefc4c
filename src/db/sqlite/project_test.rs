//! Tests for SqliteProjectRepository.

use crate::db::{DbError, NewProject, Project, ProjectRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn named(p_name: &str) -> NewProject {
    NewProject {
        p_name: p_name.to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_project() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    let created = store
        .projects()
        .create(&named("Test Project"))
        .await
        .expect("Create should succeed");
    assert_eq!(created.p_id, 1);

    let retrieved = store
        .projects()
        .get(created.p_id)
        .await
        .expect("Get should succeed");
    assert_eq!(retrieved.p_name, "Test Project");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_increasing_ids() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    let first = store.projects().create(&named("First")).await.unwrap();
    let second = store.projects().create(&named("Second")).await.unwrap();

    assert!(second.p_id > first.p_id);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_project_returns_not_found() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    let result = store.projects().get(999).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_projects_includes_created_in_id_order() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    assert!(store.projects().list().await.unwrap().is_empty());

    for name in ["Alpha", "Beta", "Gamma"] {
        store.projects().create(&named(name)).await.unwrap();
    }

    let projects = store.projects().list().await.expect("List should succeed");
    let names: Vec<&str> = projects.iter().map(|p| p.p_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    assert!(projects.windows(2).all(|w| w[0].p_id < w[1].p_id));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_project_renames() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    let mut project = store.projects().create(&named("Original")).await.unwrap();
    project.p_name = "Updated".to_string();

    let updated = store.projects().update(&project).await.unwrap();
    assert!(updated);

    let retrieved = store.projects().get(project.p_id).await.unwrap();
    assert_eq!(retrieved.p_name, "Updated");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_nonexistent_project_is_a_no_op() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    let ghost = Project {
        p_id: 42,
        p_name: "Ghost".to_string(),
    };
    let updated = store.projects().update(&ghost).await.expect("No error");
    assert!(!updated);

    assert!(store.projects().list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_project() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    let project = store.projects().create(&named("To Delete")).await.unwrap();

    let deleted = store.projects().delete(project.p_id).await.unwrap();
    assert!(deleted);

    let result = store.projects().get(project.p_id).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_nonexistent_project_is_a_no_op() {
    let db = setup_db().await;
    let mut store = db.begin().await.unwrap();

    let deleted = store.projects().delete(7).await.expect("No error");
    assert!(!deleted);
}
