use crate::auth::errors::AuthError;
use crate::auth::models::TokenClaims;
use crate::user::models::Username;

/// Port for issuing and checking access tokens.
///
/// Pure CPU work, so the methods are synchronous.
pub trait AuthServicePort: Send + Sync + 'static {
    /// Issue a signed token for `username` valid for the configured TTL.
    ///
    /// # Errors
    /// * `TokenCreationFailed` - Signing failed
    fn create_token(&self, username: &Username) -> Result<String, AuthError>;

    /// Verify signature, algorithm and expiry, then return the claims.
    ///
    /// # Errors
    /// * `CannotParseToken` - Input is not a decodable JWT
    /// * `IncorrectSignMethod` - Algorithm outside the HMAC family
    /// * `InvalidToken` - Expired, bad signature or bad claims
    fn parse_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}
