//! Orchestration service for the user roster.

use crate::user::{
    domain::{User, UserDomainError, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum UserRosterError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] UserDomainError),

    /// The referenced user does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for roster operations.
pub type UserRosterResult<T> = Result<T, UserRosterError>;

/// User roster orchestration service.
pub struct UserRosterService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for UserRosterService<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> UserRosterService<R>
where
    R: UserRepository,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every roster entry in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`UserRosterError::Repository`] when the listing fails.
    pub async fn list(&self) -> UserRosterResult<Vec<User>> {
        Ok(self.repository.list().await?)
    }

    /// Creates a roster entry and returns it.
    ///
    /// The name is validated before an identifier is reserved, so
    /// rejected input does not consume identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`UserRosterError::Validation`] when the name is empty, or
    /// [`UserRosterError::Repository`] when persistence fails.
    pub async fn create(&self, name: String) -> UserRosterResult<User> {
        if name.is_empty() {
            return Err(UserDomainError::NameRequired.into());
        }
        let id = self.repository.reserve_id().await?;
        let user = User::create(id, name)?;
        self.repository.insert(&user).await?;
        tracing::debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Removes a roster entry, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`UserRosterError::NotFound`] when no entry has the
    /// identifier.
    pub async fn delete(&self, id: UserId) -> UserRosterResult<User> {
        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(UserRosterError::NotFound(id))?;
        tracing::debug!(user_id = %id, "user deleted");
        Ok(removed)
    }
}
