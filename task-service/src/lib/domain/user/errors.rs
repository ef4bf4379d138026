use thiserror::Error;

use crate::domain::errors::RepositoryError;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username can only consist of lowercase latin letters, digits and underscore, got {0:?}"
    )]
    InvalidCharacters(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Username already exists: {0}")]
    AlreadyExists(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    Database(String),
}

impl UserError {
    /// Translate a storage failure for the user identified by `username`.
    pub(crate) fn from_repository(err: RepositoryError, username: &str) -> Self {
        match err {
            RepositoryError::NotFound => UserError::NotFound(username.to_string()),
            RepositoryError::AlreadyExists => UserError::AlreadyExists(username.to_string()),
            RepositoryError::ForeignKeyViolation | RepositoryError::Database(_) => {
                UserError::Database(err.to_string())
            }
        }
    }
}
