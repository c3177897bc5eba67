//! Domain model for task records.
//!
//! The task domain models record materialisation from draft input,
//! schedule-window validation, typed partial updates, and the completion
//! lifecycle (stamping and clearing `completedAt`), while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod schedule;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use priority::PriorityFlags;
pub use task::{Task, TaskDraft, TaskPatch};
