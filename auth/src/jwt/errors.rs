use thiserror::Error;

/// Error type for JWT operations.
///
/// Decode failures are classified once here so callers can tell a garbled
/// token apart from one that parsed but must not be trusted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Bad segment count, base64 or JSON.
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    /// Header names an algorithm outside the accepted HMAC family.
    #[error("Unexpected signing algorithm: {0}")]
    UnexpectedAlgorithm(String),

    #[error("Invalid claims: {0}")]
    InvalidClaims(String),
}
