use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::CredentialsRequestBody;
use super::JsonBody;
use crate::inbound::http::router::AppState;
use crate::user::models::CreateUserCommand;

pub async fn sign_up(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialsRequestBody>,
) -> Result<StatusCode, ApiError> {
    let (username, password) = body.try_into_parts()?;

    let user = state
        .user_service
        .create_user(CreateUserCommand::new(username, password))
        .await?;

    tracing::info!(username = %user.username, "User signed up");

    Ok(StatusCode::CREATED)
}
