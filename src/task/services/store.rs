//! Service layer for the task store operation set.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
///
/// Owns the operation set over task records (list, fetch, create,
/// update, delete) and the order in which validation and derived-field
/// rules run. The repository behind it only stores records. Every
/// validation failure short-circuits before any store mutation.
pub struct TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the listing fails.
    pub async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the
    /// identifier.
    pub async fn get(&self, id: TaskId) -> TaskStoreResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskStoreError::NotFound(id))
    }

    /// Creates a task from draft input and returns the materialised
    /// record.
    ///
    /// The draft is validated before an identifier is reserved, so
    /// rejected drafts do not consume identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the draft fails the
    /// creation rules, or [`TaskStoreError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        draft.validate()?;
        let id = self.repository.reserve_id().await?;
        let task = Task::create(id, draft, &*self.clock)?;
        self.repository.insert(&task).await?;
        tracing::debug!(task_id = %task.task_id(), "task created");
        Ok(task)
    }

    /// Overlays a patch onto an existing task and returns the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the
    /// identifier, [`TaskStoreError::Validation`] when the merged
    /// end-state fails validation, or [`TaskStoreError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut task = self.get(id).await?;
        task.apply_patch(patch, &*self.clock)?;
        self.repository.update(&task).await?;
        tracing::debug!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Removes a task, returning the deleted record.
    ///
    /// Deletion is immediate and permanent; the identifier is never
    /// reused.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the
    /// identifier.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<Task> {
        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(TaskStoreError::NotFound(id))?;
        tracing::debug!(task_id = %id, "task deleted");
        Ok(removed)
    }
}
