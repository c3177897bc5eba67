//! Domain model for the user roster.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned while validating roster input.
///
/// The `Display` output is the message surfaced verbatim to clients of
/// the REST interface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user name is missing or empty.
    #[error("Name is required")]
    NameRequired,
}

/// Unique identifier for a roster entry.
///
/// Identifiers are assigned sequentially by the roster, starting at one,
/// independently of the task store's counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    /// Creates a roster entry from a validated name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::NameRequired`] when the name is empty.
    pub fn create(id: UserId, name: String) -> Result<Self, UserDomainError> {
        if name.is_empty() {
            return Err(UserDomainError::NameRequired);
        }
        Ok(Self { id, name })
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
