use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::task::errors::TaskError;
use crate::task::models::CreateTaskCommand;
use crate::task::models::Task;
use crate::task::models::TaskId;
use crate::task::models::UpdateTaskCommand;
use crate::user::models::Username;

/// Port for task domain service operations.
///
/// Every operation is scoped to `owner`. A task that exists but belongs to a
/// different user is reported exactly like a missing one.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `UserNotFound` - Owner has no user record
    /// * `Database` - Storage failure
    async fn create_task(
        &self,
        owner: &Username,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// All tasks of `owner`, oldest first. Empty when there are none.
    async fn list_tasks(&self, owner: &Username) -> Result<Vec<Task>, TaskError>;

    /// # Errors
    /// * `NotFound` - No task with this id for this owner
    /// * `Database` - Storage failure
    async fn get_task(&self, id: &TaskId, owner: &Username) -> Result<Task, TaskError>;

    /// Replace title, description and due date; refreshes `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - No task with this id for this owner
    /// * `Database` - Storage failure
    async fn update_task(
        &self,
        id: &TaskId,
        owner: &Username,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - No task with this id for this owner
    /// * `Database` - Storage failure
    async fn delete_task(&self, id: &TaskId, owner: &Username) -> Result<(), TaskError>;
}

/// Persistence operations for tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// # Errors
    /// * `ForeignKeyViolation` - Owner has no user record
    async fn create(
        &self,
        owner: &Username,
        command: CreateTaskCommand,
    ) -> Result<Task, RepositoryError>;

    async fn find_by_owner(&self, owner: &Username) -> Result<Vec<Task>, RepositoryError>;

    /// # Errors
    /// * `NotFound` - No row matches both id and owner
    async fn find_by_id(&self, id: &TaskId, owner: &Username) -> Result<Task, RepositoryError>;

    /// # Errors
    /// * `NotFound` - No row matches both id and owner
    async fn update(
        &self,
        id: &TaskId,
        owner: &Username,
        command: UpdateTaskCommand,
    ) -> Result<Task, RepositoryError>;

    /// # Errors
    /// * `NotFound` - No row was deleted
    async fn delete(&self, id: &TaskId, owner: &Username) -> Result<(), RepositoryError>;
}
