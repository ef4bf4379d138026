use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::task::errors::TaskError;
use crate::task::models::CreateTaskCommand;
use crate::task::models::Task;
use crate::task::models::TaskId;
use crate::task::models::UpdateTaskCommand;
use crate::task::ports::TaskRepository;
use crate::task::ports::TaskServicePort;
use crate::user::models::Username;

/// Domain service implementation for task operations.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

/// Map a repository failure and log it when it is not a client-facing outcome.
fn translate(
    operation: &'static str,
    err: RepositoryError,
    id: Option<TaskId>,
    owner: &Username,
) -> TaskError {
    let err = TaskError::from_repository(err, id, owner.as_str());
    if let TaskError::Database(ref cause) = err {
        tracing::error!(operation, owner = %owner, error = %cause, "Task storage failure");
    }
    err
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(
        &self,
        owner: &Username,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        self.repository
            .create(owner, command)
            .await
            .map_err(|e| translate("create_task", e, None, owner))
    }

    async fn list_tasks(&self, owner: &Username) -> Result<Vec<Task>, TaskError> {
        self.repository
            .find_by_owner(owner)
            .await
            .map_err(|e| translate("list_tasks", e, None, owner))
    }

    async fn get_task(&self, id: &TaskId, owner: &Username) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(id, owner)
            .await
            .map_err(|e| translate("get_task", e, Some(*id), owner))
    }

    async fn update_task(
        &self,
        id: &TaskId,
        owner: &Username,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        self.repository
            .update(id, owner, command)
            .await
            .map_err(|e| translate("update_task", e, Some(*id), owner))
    }

    async fn delete_task(&self, id: &TaskId, owner: &Username) -> Result<(), TaskError> {
        self.repository
            .delete(id, owner)
            .await
            .map_err(|e| translate("delete_task", e, Some(*id), owner))
    }
}
