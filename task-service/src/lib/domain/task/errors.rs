use thiserror::Error;

use crate::domain::errors::RepositoryError;
use crate::task::models::TaskId;

/// Error for TaskId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdError {
    #[error("Invalid task id: {0}")]
    InvalidFormat(String),
}

/// Error for required free-text task fields
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskFieldError {
    #[error("field {0} is required")]
    Required(&'static str),
}

/// Top-level error for all task-related operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    /// Also returned when the task exists but belongs to someone else.
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Owner does not exist: {0}")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl TaskError {
    pub(crate) fn from_repository(err: RepositoryError, id: Option<TaskId>, owner: &str) -> Self {
        match (err, id) {
            (RepositoryError::NotFound, Some(id)) => TaskError::NotFound(id),
            (RepositoryError::ForeignKeyViolation, _) => TaskError::UserNotFound(owner.to_string()),
            (err, _) => TaskError::Database(err.to_string()),
        }
    }
}
