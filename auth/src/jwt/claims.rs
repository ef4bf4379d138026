use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token payload.
///
/// Carries only the RFC 7519 claims the task service needs: the subject
/// (username), when the token was issued and when it stops being valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject that expire `ttl` from now.
    ///
    /// A negative `ttl` yields claims that are already expired.
    pub fn for_subject(sub: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: sub.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check if the claims are past their expiry.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
