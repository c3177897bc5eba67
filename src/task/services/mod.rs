//! Orchestration services for the task tracking context.

mod store;

pub use store::{TaskStoreError, TaskStoreResult, TaskStoreService};
