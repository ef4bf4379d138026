use thiserror::Error;

/// Storage failures as seen by the domain.
///
/// Repositories translate driver errors into this closed set; services then
/// map it onto their own error enums.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    /// A referenced parent row does not exist.
    #[error("Referenced record does not exist")]
    ForeignKeyViolation,

    #[error("Database error: {0}")]
    Database(String),
}
