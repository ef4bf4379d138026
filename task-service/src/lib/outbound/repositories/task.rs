use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::corrupt_row;
use super::translate_error;
use crate::domain::errors::RepositoryError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDescription;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::models::Username;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: PgRow) -> Result<Task, RepositoryError> {
        let owner: String = row.try_get("username").map_err(translate_error)?;
        let title: String = row.try_get("title").map_err(translate_error)?;
        let description: String = row.try_get("description").map_err(translate_error)?;

        Ok(Task {
            id: TaskId(row.try_get("id").map_err(translate_error)?),
            owner: Username::new(owner).map_err(|e| corrupt_row("username", e))?,
            title: TaskTitle::new(title).map_err(|e| corrupt_row("title", e))?,
            description: TaskDescription::new(description)
                .map_err(|e| corrupt_row("description", e))?,
            due_date: row.try_get("due_date").map_err(translate_error)?,
            created_at: row.try_get("created_at").map_err(translate_error)?,
            updated_at: row.try_get("updated_at").map_err(translate_error)?,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(
        &self,
        owner: &Username,
        command: CreateTaskCommand,
    ) -> Result<Task, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO tasks (username, title, description, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, title, description, due_date, created_at, updated_at
            "#,
        )
        .bind(owner.as_str())
        .bind(command.title.as_str())
        .bind(command.description.as_str())
        .bind(command.due_date)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Self::row_to_task(row)
    }

    async fn find_by_owner(&self, owner: &Username) -> Result<Vec<Task>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, title, description, due_date, created_at, updated_at
            FROM tasks
            WHERE username = $1
            ORDER BY id
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(translate_error)?;

        rows.into_iter().map(Self::row_to_task).collect()
    }

    async fn find_by_id(&self, id: &TaskId, owner: &Username) -> Result<Task, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, title, description, due_date, created_at, updated_at
            FROM tasks
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Self::row_to_task(row)
    }

    async fn update(
        &self,
        id: &TaskId,
        owner: &Username,
        command: UpdateTaskCommand,
    ) -> Result<Task, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $3, description = $4, due_date = $5, updated_at = now()
            WHERE id = $1 AND username = $2
            RETURNING id, username, title, description, due_date, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(owner.as_str())
        .bind(command.title.as_str())
        .bind(command.description.as_str())
        .bind(command.due_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Self::row_to_task(row)
    }

    async fn delete(&self, id: &TaskId, owner: &Username) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.as_str())
        .execute(&self.pool)
        .await
        .map_err(translate_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
