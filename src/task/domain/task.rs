//! Task record aggregate and construction helpers.

use super::{Priority, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Category applied to drafts that do not name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Parameter object describing a task before the store assigns its id.
///
/// The draft performs no validation; title non-emptiness and due-date shape
/// are checked by the presentation layer before a draft is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    category: String,
    due_date: Option<String>,
    priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with the given title and default remaining fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_owned(),
            due_date: None,
            priority: Priority::default(),
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the due date (a `YYYY-MM-DD` value).
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Task record aggregate root.
///
/// Identity is immutable once assigned; descriptive attributes may change
/// freely. Completion transitions stamp or clear `completed_at` through the
/// injected clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    category: String,
    due_date: Option<String>,
    priority: Priority,
    completed: bool,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted category.
    pub category: String,
    /// Persisted due date, if any.
    pub due_date: Option<String>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new, incomplete task from a draft.
    ///
    /// Only the store constructs tasks so that identifier assignment stays
    /// in one place.
    pub(crate) fn new(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let TaskDraft {
            title,
            description,
            category,
            due_date,
            priority,
        } = draft;

        Self {
            id,
            title,
            description,
            category,
            due_date,
            priority,
            completed: false,
            created_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage without re-stamping
    /// timestamps.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            category: data.category,
            due_date: data.due_date,
            priority: data.priority,
            completed: data.completed,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description (may be empty).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the due date, if one is set.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, or `None` while incomplete.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Replaces or clears the due date.
    pub fn set_due_date(&mut self, due_date: Option<String>) {
        self.due_date = due_date;
    }

    /// Replaces the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Marks the task completed and stamps the completion time.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.completed = true;
        self.completed_at = Some(clock.utc());
    }

    /// Marks the task incomplete and clears the completion time.
    pub const fn mark_incomplete(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}
