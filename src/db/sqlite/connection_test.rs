//! Tests for the SQLite data store: migrations and transaction scoping.

use crate::db::{DbError, NewProject, ProjectRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn demo() -> NewProject {
    NewProject {
        p_name: "Demo".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_all_tables() {
    let db = setup_db().await;

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations is created by sqlx for migration tracking.
    for table in ["_sqlx_migrations", "projects", "tasks"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = setup_db().await;

    db.migrate().await.expect("Second migration should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed");
    assert_eq!(count, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn committed_writes_are_visible_to_later_transactions() {
    let db = setup_db().await;

    let mut store = db.begin().await.expect("Begin should succeed");
    let created = store.projects().create(&demo()).await.unwrap();
    store.commit().await.expect("Commit should succeed");

    let mut store = db.begin().await.unwrap();
    let fetched = store.projects().get(created.p_id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_an_uncommitted_store_rolls_back() {
    let db = setup_db().await;

    {
        let mut store = db.begin().await.unwrap();
        store.projects().create(&demo()).await.unwrap();
        // dropped without commit
    }

    let mut store = db.begin().await.unwrap();
    let projects = store.projects().list().await.unwrap();
    assert!(projects.is_empty(), "Uncommitted project leaked: {:?}", projects);
}

#[tokio::test(flavor = "multi_thread")]
async fn explicit_rollback_discards_writes() {
    let db = setup_db().await;

    let mut store = db.begin().await.unwrap();
    let created = store.projects().create(&demo()).await.unwrap();
    store.rollback().await.expect("Rollback should succeed");

    let mut store = db.begin().await.unwrap();
    let result = store.projects().get(created.p_id).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskpad.db");

    let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
    db.migrate().await.expect("Migration should succeed");

    let mut store = db.begin().await.unwrap();
    store.projects().create(&demo()).await.unwrap();
    store.commit().await.unwrap();

    assert!(path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskpad.db");

    {
        let db = SqliteDatabase::open(&path).await.unwrap();
        db.migrate().await.unwrap();
        let mut store = db.begin().await.unwrap();
        store.projects().create(&demo()).await.unwrap();
        store.commit().await.unwrap();
        db.pool().close().await;
    }

    let db = SqliteDatabase::open(&path).await.unwrap();
    db.migrate().await.unwrap();
    let mut store = db.begin().await.unwrap();
    let projects = store.projects().list().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].p_name, "Demo");
}

#[tokio::test(flavor = "multi_thread")]
async fn second_writer_waits_for_the_first_to_commit() {
    let dir = tempfile::tempdir().unwrap();
    let db = std::sync::Arc::new(
        SqliteDatabase::open(dir.path().join("writers.db"))
            .await
            .unwrap(),
    );
    db.migrate().await.unwrap();

    let mut first = db.begin_write().await.expect("First writer should begin");
    first.projects().create(&demo()).await.unwrap();

    let second = {
        let db = db.clone();
        tokio::spawn(async move {
            let mut store = db.begin_write().await?;
            let created = store
                .projects()
                .create(&NewProject {
                    p_name: "Second".to_string(),
                })
                .await?;
            store.commit().await?;
            Ok::<_, DbError>(created)
        })
    };

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    first.commit().await.expect("First commit should succeed");

    let created = second.await.unwrap().expect("Second writer should succeed");
    assert_eq!(created.p_id, 2);

    let mut store = db.begin().await.unwrap();
    assert_eq!(store.projects().list().await.unwrap().len(), 2);
}
