use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::corrupt_row;
use super::translate_error;
use crate::domain::errors::RepositoryError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, RepositoryError> {
        let username: String = row.try_get("username").map_err(translate_error)?;

        Ok(User {
            username: Username::new(username).map_err(|e| corrupt_row("username", e))?,
            password_hash: row.try_get("password_hash").map_err(translate_error)?,
            created_at: row.try_get("created_at").map_err(translate_error)?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING username, password_hash, created_at
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_error)?;

        Self::row_to_user(row)
    }

    async fn find_by_username(&self, username: &Username) -> Result<User, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_error)?
        .ok_or(RepositoryError::NotFound)?;

        Self::row_to_user(row)
    }
}
