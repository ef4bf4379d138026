use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::task::errors::TaskFieldError;
use crate::task::errors::TaskIdError;
use crate::user::models::Username;

/// Task owned by a single user.
///
/// `created_at` and `updated_at` are assigned by storage; they are equal on
/// creation and every update moves `updated_at` forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub owner: Username,
    pub title: TaskTitle,
    pub description: TaskDescription,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Parse a task ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Segment is not an integer
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        i64::from_str(s)
            .map(TaskId)
            .map_err(|_| TaskIdError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty task title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn new(title: String) -> Result<Self, TaskFieldError> {
        required("title", title).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-empty task description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription(String);

impl TaskDescription {
    pub fn new(description: String) -> Result<Self, TaskFieldError> {
        required("description", description).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn required(field: &'static str, value: String) -> Result<String, TaskFieldError> {
    if value.is_empty() {
        Err(TaskFieldError::Required(field))
    } else {
        Ok(value)
    }
}

/// Command to create a task for the authenticated owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskCommand {
    pub title: TaskTitle,
    pub description: TaskDescription,
    pub due_date: DateTime<Utc>,
}

/// Command to replace every editable field of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskCommand {
    pub title: TaskTitle,
    pub description: TaskDescription,
    pub due_date: DateTime<Utc>,
}
