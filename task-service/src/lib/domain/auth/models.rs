use chrono::DateTime;
use chrono::Utc;

use crate::user::models::Username;

/// Verified contents of an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub username: Username,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
