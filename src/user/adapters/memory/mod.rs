//! In-memory user roster repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Entries live in an ordered map keyed by identifier; identifiers grow
/// monotonically from one, so ascending key order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug)]
struct InMemoryUserState {
    users: BTreeMap<UserId, User>,
    next_id: u64,
}

impl Default for InMemoryUserState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryUserRepository {
    /// Creates an empty repository with the identifier counter at one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> UserRepositoryResult<RwLockReadGuard<'_, InMemoryUserState>> {
        self.state
            .read()
            .map_err(|err| UserRepositoryError::storage(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> UserRepositoryResult<RwLockWriteGuard<'_, InMemoryUserState>> {
        self.state
            .write()
            .map_err(|err| UserRepositoryError::storage(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn reserve_id(&self) -> UserRepositoryResult<UserId> {
        let mut state = self.write()?;
        let id = UserId::new(state.next_id);
        state.next_id += 1;
        Ok(id)
    }

    async fn insert(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.write()?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.read()?;
        Ok(state.users.values().cloned().collect())
    }

    async fn remove(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let mut state = self.write()?;
        Ok(state.users.remove(&id))
    }
}
