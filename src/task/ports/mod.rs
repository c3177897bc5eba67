//! Port contracts for the task tracking context.

mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
