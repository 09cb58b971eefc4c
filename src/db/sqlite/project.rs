//! SQLite ProjectRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use super::helpers::to_db_error;
use crate::db::{DbError, DbResult, NewProject, Project, ProjectRepository};

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) conn: &'a mut SqliteConnection,
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    async fn list(&mut self) -> DbResult<Vec<Project>> {
        let rows = sqlx::query("SELECT p_id, p_name FROM projects ORDER BY p_id")
            .fetch_all(&mut *self.conn)
            .await
            .map_err(to_db_error)?;

        Ok(rows.iter().map(row_to_project).collect())
    }

    async fn create(&mut self, project: &NewProject) -> DbResult<Project> {
        let result = sqlx::query("INSERT INTO projects (p_name) VALUES (?)")
            .bind(&project.p_name)
            .execute(&mut *self.conn)
            .await
            .map_err(to_db_error)?;

        Ok(Project {
            p_id: result.last_insert_rowid(),
            p_name: project.p_name.clone(),
        })
    }

    async fn get(&mut self, p_id: i64) -> DbResult<Project> {
        let row = sqlx::query("SELECT p_id, p_name FROM projects WHERE p_id = ?")
            .bind(p_id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(to_db_error)?;

        row.as_ref()
            .map(row_to_project)
            .ok_or_else(|| DbError::project_not_found(p_id))
    }

    async fn update(&mut self, project: &Project) -> DbResult<bool> {
        let result = sqlx::query("UPDATE projects SET p_name = ? WHERE p_id = ?")
            .bind(&project.p_name)
            .bind(project.p_id)
            .execute(&mut *self.conn)
            .await
            .map_err(to_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&mut self, p_id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE p_id = ?")
            .bind(p_id)
            .execute(&mut *self.conn)
            .await
            .map_err(to_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_project(row: &SqliteRow) -> Project {
    Project {
        p_id: row.get("p_id"),
        p_name: row.get("p_name"),
    }
}
