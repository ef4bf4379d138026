use std::fmt;

use thiserror::Error;

/// Why a token that decoded cleanly was still rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTokenReason {
    Expired,
    BadSignature,
    BadClaims(String),
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTokenReason::Expired => f.write_str("token is expired"),
            InvalidTokenReason::BadSignature => f.write_str("signature mismatch"),
            InvalidTokenReason::BadClaims(detail) => write!(f, "bad claims: {}", detail),
        }
    }
}

/// Token service failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Not a JWT at all.
    #[error("Cannot parse token: {0}")]
    CannotParseToken(String),

    #[error("Invalid token: {0}")]
    InvalidToken(InvalidTokenReason),

    #[error("Incorrect sign method")]
    IncorrectSignMethod,

    #[error("Failed to create token: {0}")]
    TokenCreationFailed(String),
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::Malformed(reason) => AuthError::CannotParseToken(reason),
            auth::JwtError::TokenExpired => AuthError::InvalidToken(InvalidTokenReason::Expired),
            auth::JwtError::InvalidSignature => {
                AuthError::InvalidToken(InvalidTokenReason::BadSignature)
            }
            auth::JwtError::InvalidClaims(detail) => {
                AuthError::InvalidToken(InvalidTokenReason::BadClaims(detail))
            }
            auth::JwtError::UnexpectedAlgorithm(_) => AuthError::IncorrectSignMethod,
            auth::JwtError::EncodingFailed(reason) => AuthError::TokenCreationFailed(reason),
        }
    }
}
