//! Schedule-window validation for task start and due dates.

use super::TaskDomainError;
use chrono::{DateTime, Utc};

/// Validates a task's schedule window.
///
/// The rules, in evaluation order:
///
/// - when both dates are present, the start date must not be after the
///   due date;
/// - a start date without a due date is rejected;
/// - a due date without a start date is allowed (there is no symmetric
///   requirement).
///
/// # Errors
///
/// Returns [`TaskDomainError::StartAfterDue`] or
/// [`TaskDomainError::DueDateRequired`] when a rule is violated.
pub fn validate_window(
    start_date: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
) -> Result<(), TaskDomainError> {
    match (start_date, due_date) {
        (Some(start), Some(due)) if start > due => Err(TaskDomainError::StartAfterDue),
        (Some(_), None) => Err(TaskDomainError::DueDateRequired),
        _ => Ok(()),
    }
}
