use thiserror::Error;

/// Failures raised while hashing or checking a password.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// The configured pepper was rejected by Argon2 (e.g. too long).
    #[error("Hasher secret rejected: {0}")]
    InvalidSecret(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a parseable PHC string.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
