use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Algorithms accepted on decode. Anything outside the HMAC family is rejected
/// before the signature is even checked.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type to allow services to define their own token payload.
/// Signs with HS256 (HMAC with SHA-256).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Requires `exp` and `sub`, applies no expiry leeway and only accepts
    /// HMAC-signed tokens.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be split or decoded
    /// * `UnexpectedAlgorithm` - Header algorithm is not HS256/HS384/HS512
    /// * `InvalidSignature` - Signature does not match the key
    /// * `TokenExpired` - `exp` is in the past
    /// * `InvalidClaims` - Any other claim validation failure
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        decode::<T>(token, &self.decoding_key, &Self::validation())
            .map(|token_data| token_data.claims)
            .map_err(|e| classify(token, e))
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

fn classify(token: &str, error: JsonWebTokenError) -> JwtError {
    match error.kind() {
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            JwtError::UnexpectedAlgorithm(error.to_string())
        }
        ErrorKind::ImmatureSignature
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject
        | ErrorKind::MissingRequiredClaim(_) => JwtError::InvalidClaims(error.to_string()),
        ErrorKind::Json(_) => match foreign_algorithm(token) {
            Some(alg) => JwtError::UnexpectedAlgorithm(format!("algorithm {alg} is not accepted")),
            None => JwtError::Malformed(error.to_string()),
        },
        _ => JwtError::Malformed(error.to_string()),
    }
}

/// `alg` named by the token header when it is not one of the accepted HMAC
/// variants. jsonwebtoken fails header deserialization on names it does not
/// know (`none` among them), so the header is inspected as plain JSON.
fn foreign_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(segment.trim_end_matches('=')).ok()?;
    let header: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let alg = header.get("alg")?.as_str()?;

    match alg.parse::<Algorithm>() {
        Ok(known) if ACCEPTED_ALGORITHMS.contains(&known) => None,
        _ => Some(alg.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::jwt::Claims;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    // {"alg":"RS256","typ":"JWT"}.{"sub":"alice","iat":1700000000,"exp":4102444800}.<junk>
    const RS256_TOKEN: &str = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.\
        eyJzdWIiOiJhbGljZSIsImlhdCI6MTcwMDAwMDAwMCwiZXhwIjo0MTAyNDQ0ODAwfQ.\
        c2lnbmF0dXJl";

    // {"alg":"none","typ":"JWT"}.{"sub":"alice","iat":1700000000,"exp":4102444800}.
    const UNSIGNED_TOKEN: &str = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.\
        eyJzdWIiOiJhbGljZSIsImlhdCI6MTcwMDAwMDAwMCwiZXhwIjo0MTAyNDQ0ODAwfQ.";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_subject("alice", Duration::hours(1));

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let handler = JwtHandler::new(SECRET);

        assert!(matches!(
            handler.decode::<Claims>("invalid.token.here"),
            Err(JwtError::Malformed(_))
        ));
        assert!(matches!(
            handler.decode::<Claims>("not-a-token"),
            Err(JwtError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&Claims::for_subject("alice", Duration::hours(1)))
            .expect("Failed to encode token");

        assert_eq!(
            handler2.decode::<Claims>(&token),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);
        let token = handler
            .encode(&Claims::for_subject("alice", Duration::minutes(-5)))
            .unwrap();

        assert_eq!(handler.decode::<Claims>(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_decode_rejects_non_hmac_algorithm() {
        let handler = JwtHandler::new(SECRET);

        assert!(matches!(
            handler.decode::<Claims>(RS256_TOKEN),
            Err(JwtError::UnexpectedAlgorithm(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unsigned_token() {
        let handler = JwtHandler::new(SECRET);

        assert!(matches!(
            handler.decode::<Claims>(UNSIGNED_TOKEN),
            Err(JwtError::UnexpectedAlgorithm(_))
        ));
    }

    #[test]
    fn test_decode_unknown_algorithm_name() {
        let handler = JwtHandler::new(SECRET);
        // {"alg":"HS999"}
        let token = format!("eyJhbGciOiJIUzk5OSJ9.{}.", UNSIGNED_TOKEN.split('.').nth(1).unwrap());

        assert!(matches!(
            handler.decode::<Claims>(&token),
            Err(JwtError::UnexpectedAlgorithm(_))
        ));
    }

    #[test]
    fn test_decode_header_without_alg_is_malformed() {
        let handler = JwtHandler::new(SECRET);
        // {"typ":"JWT"}
        let token = format!("eyJ0eXAiOiJKV1QifQ.{}.c2ln", UNSIGNED_TOKEN.split('.').nth(1).unwrap());

        assert!(matches!(
            handler.decode::<Claims>(&token),
            Err(JwtError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_accepts_other_hmac_variants() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_subject("alice", Duration::hours(1));

        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let decoded: Claims = handler.decode(&token).unwrap();
        assert_eq!(decoded.sub, "alice");
    }
}
