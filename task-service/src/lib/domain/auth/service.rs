use auth::Claims;
use auth::JwtHandler;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::auth::errors::AuthError;
use crate::auth::errors::InvalidTokenReason;
use crate::auth::models::TokenClaims;
use crate::auth::ports::AuthServicePort;
use crate::user::models::Username;

/// HS256 token service with a fixed time-to-live.
pub struct TokenService {
    jwt_handler: JwtHandler,
    ttl: Duration,
}

impl TokenService {
    /// # Arguments
    /// * `sign_key` - Symmetric signing key
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(sign_key: &[u8], ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(sign_key),
            ttl,
        }
    }
}

impl AuthServicePort for TokenService {
    fn create_token(&self, username: &Username) -> Result<String, AuthError> {
        let claims = Claims::for_subject(username, self.ttl);

        self.jwt_handler.encode(&claims).map_err(|e| {
            tracing::error!(operation = "create_token", error = %e, "Token signing failed");
            AuthError::from(e)
        })
    }

    fn parse_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        let username = Username::new(claims.sub)
            .map_err(|e| AuthError::InvalidToken(InvalidTokenReason::BadClaims(e.to_string())))?;

        Ok(TokenClaims {
            username,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, AuthError> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        AuthError::InvalidToken(InvalidTokenReason::BadClaims(format!(
            "timestamp out of range: {}",
            seconds
        )))
    })
}
