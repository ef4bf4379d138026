pub mod task;
pub mod user;

pub use task::PostgresTaskRepository;
pub use user::PostgresUserRepository;

use crate::domain::errors::RepositoryError;

/// Single place where driver errors are folded into `RepositoryError`.
fn translate_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::RowNotFound = e {
        return RepositoryError::NotFound;
    }
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::AlreadyExists;
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::ForeignKeyViolation;
        }
    }
    RepositoryError::Database(e.to_string())
}

/// A row that no longer satisfies the domain invariants.
fn corrupt_row(column: &str, reason: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Database(format!("corrupt {} column: {}", column, reason))
}
