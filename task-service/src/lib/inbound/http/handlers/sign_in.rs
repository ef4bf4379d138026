use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequestBody;
use super::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialsRequestBody>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    let (username, password) = body.try_into_parts()?;

    let matched = state
        .user_service
        .verify_password(&username, &password)
        .await?;

    if !matched {
        tracing::warn!(username = %username, "Sign-in with incorrect password");
        return Err(ApiError::Forbidden("incorrect password".to_string()));
    }

    let token = state.auth_service.create_token(&username)?;

    Ok(ApiSuccess::new(StatusCode::OK, SignInResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub token: String,
}
