//! Repository port for task record storage and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Reserves the next sequential task identifier.
    ///
    /// Reserved identifiers are never handed out twice, even when the
    /// record they were reserved for is deleted or never inserted.
    async fn reserve_id(&self) -> TaskRepositoryResult<TaskId>;

    /// Stores a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a record with
    /// the same identifier already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns every stored record in insertion order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a record, returning it.
    ///
    /// Returns `None` when the record does not exist. Removal is permanent;
    /// the identifier is not reused.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The record was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
