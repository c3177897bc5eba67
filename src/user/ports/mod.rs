//! Port contracts for the user roster context.

use crate::user::domain::{User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User roster storage contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Reserves the next sequential user identifier.
    async fn reserve_id(&self) -> UserRepositoryResult<UserId>;

    /// Stores a new roster entry.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when an entry with
    /// the same identifier already exists.
    async fn insert(&self, user: &User) -> UserRepositoryResult<()>;

    /// Returns every entry in insertion order.
    async fn list(&self) -> UserRepositoryResult<Vec<User>>;

    /// Removes an entry, returning it.
    ///
    /// Returns `None` when the entry does not exist.
    async fn remove(&self, id: UserId) -> UserRepositoryResult<Option<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
