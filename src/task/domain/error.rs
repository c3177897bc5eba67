//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while validating task input.
///
/// The `Display` output of each variant is the message surfaced verbatim
/// to clients of the REST interface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is missing or empty.
    #[error("Title is required")]
    TitleRequired,

    /// Both schedule dates are present but out of order.
    #[error("Start date cannot be after due date")]
    StartAfterDue,

    /// A start date was supplied without a due date.
    #[error("Due date is required when start date is provided")]
    DueDateRequired,
}
