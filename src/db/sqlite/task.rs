//! SQLite TaskRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use super::helpers::to_db_error;
use crate::db::{DbError, DbResult, NewTask, Task, TaskRepository};

/// SQLx-backed task repository.
pub struct SqliteTaskRepository<'a> {
    pub(crate) conn: &'a mut SqliteConnection,
}

impl<'a> TaskRepository for SqliteTaskRepository<'a> {
    async fn list_by_project(&mut self, p_id: i64) -> DbResult<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT t_id, p_id, t_subject, t_date, t_priority, t_comments
             FROM tasks WHERE p_id = ? ORDER BY t_id",
        )
        .bind(p_id)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(to_db_error)?;

        Ok(rows.iter().map(row_to_task).collect())
    }

    async fn create(&mut self, task: &NewTask) -> DbResult<Task> {
        // Same transaction as the insert, so the parent cannot vanish in between
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE p_id = ?)")
                .bind(task.p_id)
                .fetch_one(&mut *self.conn)
                .await
                .map_err(to_db_error)?;

        if !exists {
            return Err(DbError::project_not_found(task.p_id));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (p_id, t_subject, t_date, t_priority, t_comments)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.p_id)
        .bind(&task.t_subject)
        .bind(&task.t_date)
        .bind(task.t_priority)
        .bind(&task.t_comments)
        .execute(&mut *self.conn)
        .await
        .map_err(to_db_error)?;

        Ok(Task {
            t_id: result.last_insert_rowid(),
            p_id: task.p_id,
            t_subject: task.t_subject.clone(),
            t_date: task.t_date.clone(),
            t_priority: task.t_priority,
            t_comments: task.t_comments.clone(),
        })
    }

    async fn get(&mut self, t_id: i64) -> DbResult<Task> {
        let row = sqlx::query(
            "SELECT t_id, p_id, t_subject, t_date, t_priority, t_comments
             FROM tasks WHERE t_id = ?",
        )
        .bind(t_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(to_db_error)?;

        row.as_ref()
            .map(row_to_task)
            .ok_or_else(|| DbError::task_not_found(t_id))
    }

    async fn update(&mut self, task: &Task) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE tasks SET t_subject = ?, t_date = ?, t_priority = ?, t_comments = ?
             WHERE t_id = ?",
        )
        .bind(&task.t_subject)
        .bind(&task.t_date)
        .bind(task.t_priority)
        .bind(&task.t_comments)
        .bind(task.t_id)
        .execute(&mut *self.conn)
        .await
        .map_err(to_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&mut self, t_id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE t_id = ?")
            .bind(t_id)
            .execute(&mut *self.conn)
            .await
            .map_err(to_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_task(row: &SqliteRow) -> Task {
    Task {
        t_id: row.get("t_id"),
        p_id: row.get("p_id"),
        t_subject: row.get("t_subject"),
        t_date: row.get("t_date"),
        t_priority: row.get("t_priority"),
        t_comments: row.get("t_comments"),
    }
}
