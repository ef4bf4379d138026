use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::auth::ports::AuthServicePort;
use crate::user::models::Username;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity of the caller, inserted into request extensions once the bearer
/// token has been verified. Task handlers scope every query to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: Username,
}

/// Middleware that validates the bearer token before any protected handler runs.
///
/// Missing or malformed header and unparsable tokens are 401; tokens that
/// parse but fail verification are 403.
pub async fn authenticate(
    State(auth_service): State<Arc<dyn AuthServicePort>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = auth_service.parse_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token rejected");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let invalid = || ApiError::Unauthorized("invalid auth header".to_string());

    let auth_str = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(invalid)?
        .to_str()
        .map_err(|_| invalid())?;

    match auth_str.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(invalid()),
    }
}
