use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TaskData>>, ApiError> {
    state
        .task_service
        .list_tasks(&auth_user.username)
        .await
        .map_err(ApiError::from)
        .map(|tasks| ApiSuccess::new(StatusCode::OK, tasks.iter().map(TaskData::from).collect()))
}
