//! Insertion-ordered store owning every task record.

use super::{PersistedTaskData, Task, TaskDraft, TaskId};
use mockable::Clock;

/// Identifier handed to the first task of a fresh store.
const INITIAL_NEXT_ID: u64 = 1;

/// The in-memory owner and query surface over the current set of tasks.
///
/// Records live in insertion order. Every query is a linear scan returning
/// borrowed views that are valid only until the next mutation; the single-
/// user scale makes indexing unnecessary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store whose first task will receive id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: INITIAL_NEXT_ID,
        }
    }

    /// Appends a new task built from `draft`, assigning the next free id.
    ///
    /// Performs no validation of the draft's contents.
    pub fn add(&mut self, draft: TaskDraft, clock: &impl Clock) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, draft, clock));
        id
    }

    /// Reinserts a persisted record, preserving its original identifier.
    ///
    /// The next free id is raised past the restored one so identifiers are
    /// never reused across reloads.
    pub fn restore(&mut self, data: PersistedTaskData) {
        self.next_id = self.next_id.max(data.id.value().saturating_add(1));
        self.tasks.push(Task::from_persisted(data));
    }

    /// Raises the next free id to at least `floor`.
    ///
    /// Used when replaying a persisted snapshot whose header recorded a
    /// counter ahead of the surviving records.
    pub fn ensure_next_id_at_least(&mut self, floor: u64) {
        self.next_id = self.next_id.max(floor);
    }

    /// Removes the task with the given id.
    ///
    /// Returns whether a record was found and removed. Remaining records
    /// keep their ids and order; the id counter is not rewound.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }

    /// Flips the completion state of the task with the given id.
    ///
    /// Returns whether the id was found. Completing stamps a fresh
    /// completion time; reopening clears it.
    pub fn toggle_completion(&mut self, id: TaskId, clock: &impl Clock) -> bool {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map_or(false, |task| {
                if task.is_completed() {
                    task.mark_incomplete();
                } else {
                    task.mark_completed(clock);
                }
                true
            })
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks whose category matches, ignoring case.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Task> {
        let wanted = category.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.category().to_lowercase() == wanted)
            .collect()
    }

    /// Returns the tasks whose title or description contains `keyword`,
    /// ignoring case.
    ///
    /// An empty keyword matches every task; rejecting it is the caller's
    /// responsibility.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        let wanted = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| {
                task.title().to_lowercase().contains(&wanted)
                    || task.description().to_lowercase().contains(&wanted)
            })
            .collect()
    }

    /// Removes every task and rewinds the id counter to 1.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.next_id = INITIAL_NEXT_ID;
    }

    /// Returns the id the next added task would receive.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
