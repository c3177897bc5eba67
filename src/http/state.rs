//! Shared application state for the REST interface.

use crate::task::{ports::TaskRepository, services::TaskStoreService};
use crate::user::{ports::UserRepository, services::UserRosterService};
use mockable::Clock;

/// Application state threaded through every handler.
pub struct AppState<R, C, U>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    /// Task store service.
    pub tasks: TaskStoreService<R, C>,
    /// User roster service.
    pub users: UserRosterService<U>,
}

impl<R, C, U> AppState<R, C, U>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    /// Creates state from the two core services.
    #[must_use]
    pub const fn new(tasks: TaskStoreService<R, C>, users: UserRosterService<U>) -> Self {
        Self { tasks, users }
    }
}

impl<R, C, U> Clone for AppState<R, C, U>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            users: self.users.clone(),
        }
    }
}
