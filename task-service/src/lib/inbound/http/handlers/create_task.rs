use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use super::TaskData;
use super::TaskRequestBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<TaskRequestBody>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    state
        .task_service
        .create_task(&auth_user.username, body.try_into_create_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::CREATED, task.into()))
}
