use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::auth::errors::AuthError;
use crate::task::errors::TaskError;
use crate::task::errors::TaskFieldError;
use crate::task::models::CreateTaskCommand;
use crate::task::models::Task;
use crate::task::models::TaskDescription;
use crate::task::models::TaskTitle;
use crate::task::models::UpdateTaskCommand;
use crate::user::errors::UserError;
use crate::user::errors::UsernameError;
use crate::user::models::Username;

pub mod create_task;
pub mod delete_task;
pub mod get_task;
pub mod list_tasks;
pub mod ping;
pub mod sign_in;
pub mod sign_up;
pub mod update_task;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Detail is logged, never sent to the client.
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(ApiErrorData { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::AlreadyExists(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(_) | UserError::Database(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TaskError::UserNotFound(_) => ApiError::BadRequest(err.to_string()),
            TaskError::Database(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::CannotParseToken(_) => ApiError::Unauthorized("invalid token".to_string()),
            AuthError::InvalidToken(_) => ApiError::Forbidden("invalid token".to_string()),
            AuthError::IncorrectSignMethod => {
                ApiError::Forbidden("incorrect sign method".to_string())
            }
            AuthError::TokenCreationFailed(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// `Json` extractor whose rejections are always a 400 with an `ApiErrorData` body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Username/password body shared by sign-up and sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCredentialsError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("field password is required")]
    EmptyPassword,
}

impl CredentialsRequestBody {
    fn try_into_parts(self) -> Result<(Username, String), ParseCredentialsError> {
        let username = Username::new(self.username)?;
        if self.password.is_empty() {
            return Err(ParseCredentialsError::EmptyPassword);
        }
        Ok((username, self.password))
    }
}

impl From<ParseCredentialsError> for ApiError {
    fn from(err: ParseCredentialsError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Body accepted by task create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskRequestBody {
    title: String,
    description: String,
    due_date: DateTime<Utc>,
}

impl TaskRequestBody {
    fn try_into_create_command(self) -> Result<CreateTaskCommand, TaskFieldError> {
        Ok(CreateTaskCommand {
            title: TaskTitle::new(self.title)?,
            description: TaskDescription::new(self.description)?,
            due_date: self.due_date,
        })
    }

    fn try_into_update_command(self) -> Result<UpdateTaskCommand, TaskFieldError> {
        Ok(UpdateTaskCommand {
            title: TaskTitle::new(self.title)?,
            description: TaskDescription::new(self.description)?,
            due_date: self.due_date,
        })
    }
}

impl From<TaskFieldError> for ApiError {
    fn from(err: TaskFieldError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Wire form of a task. The owner is implied by the bearer token and omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title.as_str().to_string(),
            description: task.description.as_str().to_string(),
            due_date: task.due_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
