//! Task record and its draft and patch input types.

use super::{PriorityFlags, TaskDomainError, TaskId, schedule};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// Input fields accepted when creating a task.
///
/// Everything except the title is optional and defaults to empty or
/// absent. Unknown fields in a JSON body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Task title. Required and non-empty.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub desc: String,
    /// Grouping label.
    #[serde(default)]
    pub category: String,
    /// Scheduled start of work.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Deadline.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft with the given title and everything else empty.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the schedule window.
    #[must_use]
    pub const fn with_schedule(
        mut self,
        start_date: Option<DateTime<Utc>>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.start_date = start_date;
        self.due_date = due_date;
        self
    }

    /// Checks the draft against the creation rules.
    ///
    /// The title check runs before the schedule-window checks so a draft
    /// that violates both reports the missing title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleRequired`] when the title is empty,
    /// otherwise whatever the schedule-window validation reports.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.title.is_empty() {
            return Err(TaskDomainError::TitleRequired);
        }
        schedule::validate_window(self.start_date, self.due_date)
    }
}

/// Typed field-by-field overlay applied by the update operation.
///
/// A field left absent keeps the stored value. The schedule dates use a
/// nested option so an explicit JSON `null` clears the stored date while
/// an absent field keeps it. The record identifier, creation timestamp,
/// and reserved schema fields are deliberately not representable here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub desc: Option<String>,
    /// Replacement category.
    #[serde(default)]
    pub category: Option<String>,
    /// Replacement completion flag.
    #[serde(default)]
    pub is_completed: Option<bool>,
    /// Replacement start date; `Some(None)` clears the stored value.
    #[serde(default, deserialize_with = "nested_option")]
    pub start_date: Option<Option<DateTime<Utc>>>,
    /// Replacement due date; `Some(None)` clears the stored value.
    #[serde(default, deserialize_with = "nested_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// Distinguishes an absent field (`None`) from an explicit JSON `null`
/// (`Some(None)`) during deserialisation.
fn nested_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A task record.
///
/// Fields are private; all mutation goes through [`Task::apply_patch`] so
/// the schedule and completion invariants hold after every operation.
/// Serialises with the camelCase wire names of the REST interface; absent
/// timestamps serialise as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    task_id: TaskId,
    title: String,
    desc: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    is_completed: bool,
    is_deleted: bool,
    parent_task_id: Option<TaskId>,
    priority: PriorityFlags,
    category: String,
    start_date: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Materialises a new record from draft input.
    ///
    /// New records always start incomplete, with `created_at` equal to
    /// `updated_at` and the reserved schema fields at their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the draft fails validation; see
    /// [`TaskDraft::validate`] for the rules and their order.
    pub fn create(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        draft.validate()?;
        let timestamp = clock.utc();
        Ok(Self {
            task_id: id,
            title: draft.title,
            desc: draft.desc,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
            is_completed: false,
            is_deleted: false,
            parent_task_id: None,
            priority: PriorityFlags::default(),
            category: draft.category,
            start_date: draft.start_date,
            due_date: draft.due_date,
        })
    }

    /// Overlays `patch` onto this record.
    ///
    /// Validation runs against the merged end-state: a patch carrying only
    /// one schedule date is checked against the stored value of the other.
    /// On success `updated_at` is refreshed unconditionally and
    /// `completed_at` is re-derived from the effective completion flag:
    /// newly completed records are stamped, records flipped back to
    /// incomplete lose the stamp, and records that stay completed keep
    /// their original stamp. On failure the record is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleRequired`] when the patch carries an
    /// empty title, otherwise whatever the schedule-window validation
    /// reports for the effective dates.
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if patch.title.as_deref().is_some_and(str::is_empty) {
            return Err(TaskDomainError::TitleRequired);
        }
        let effective_start = patch.start_date.unwrap_or(self.start_date);
        let effective_due = patch.due_date.unwrap_or(self.due_date);
        schedule::validate_window(effective_start, effective_due)?;

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(desc) = patch.desc {
            self.desc = desc;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(is_completed) = patch.is_completed {
            self.is_completed = is_completed;
        }
        self.start_date = effective_start;
        self.due_date = effective_due;

        let now = clock.utc();
        self.completed_at = match (self.is_completed, self.completed_at.take()) {
            (true, None) => Some(now),
            (true, stamped @ Some(_)) => stamped,
            (false, _) => None,
        };
        self.updated_at = now;
        Ok(())
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp, present iff the record is
    /// completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns whether the record is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the soft-delete marker. Schema-only: no operation toggles
    /// it.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns the parent task reference. Schema-only: no operation sets
    /// it.
    #[must_use]
    pub const fn parent_task_id(&self) -> Option<TaskId> {
        self.parent_task_id
    }

    /// Returns the priority flags.
    #[must_use]
    pub const fn priority(&self) -> PriorityFlags {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the scheduled start, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}
