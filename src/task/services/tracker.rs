//! Service layer coordinating the task store with its archive.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskStore};
use crate::task::ports::{TaskArchive, TaskArchiveResult};
use mockable::Clock;

/// Orchestrates the in-memory store and its persisted mirror.
///
/// The store is the system of record; the archive is rewritten wholesale
/// after every successful mutation. Archive failures are propagated so the
/// presentation layer can decide how loudly to report best-effort
/// persistence.
pub struct TaskTrackerService<A, C>
where
    A: TaskArchive,
    C: Clock,
{
    store: TaskStore,
    archive: A,
    clock: C,
}

impl<A, C> TaskTrackerService<A, C>
where
    A: TaskArchive,
    C: Clock,
{
    /// Creates a service over an empty store.
    #[must_use]
    pub const fn new(archive: A, clock: C) -> Self {
        Self {
            store: TaskStore::new(),
            archive,
            clock,
        }
    }

    /// Replays the persisted snapshot into the store.
    ///
    /// # Errors
    ///
    /// Returns the archive error when the snapshot cannot be read; the
    /// store is left untouched in that case.
    pub fn load(&mut self) -> TaskArchiveResult<()> {
        self.archive.load(&mut self.store)
    }

    /// Adds a task built from `draft` and persists the store.
    ///
    /// The task is added unconditionally; the id is returned even when the
    /// subsequent save fails.
    ///
    /// # Errors
    ///
    /// Returns the archive error when the save fails. The in-memory
    /// addition stays in place.
    pub fn add_task(&mut self, draft: TaskDraft) -> TaskArchiveResult<TaskId> {
        let id = self.store.add(draft, &self.clock);
        self.archive.save(&self.store)?;
        Ok(id)
    }

    /// Flips completion of the task with the given id and persists when a
    /// record was found.
    ///
    /// Returns whether the id was found.
    ///
    /// # Errors
    ///
    /// Returns the archive error when the save fails. The in-memory toggle
    /// stays in place.
    pub fn toggle_completion(&mut self, id: TaskId) -> TaskArchiveResult<bool> {
        if !self.store.toggle_completion(id, &self.clock) {
            return Ok(false);
        }
        self.archive.save(&self.store)?;
        Ok(true)
    }

    /// Deletes the task with the given id and persists when a record was
    /// found.
    ///
    /// Returns whether the id was found.
    ///
    /// # Errors
    ///
    /// Returns the archive error when the save fails. The in-memory
    /// deletion stays in place.
    pub fn delete_task(&mut self, id: TaskId) -> TaskArchiveResult<bool> {
        if !self.store.delete(id) {
            return Ok(false);
        }
        self.archive.save(&self.store)?;
        Ok(true)
    }

    /// Removes every task and truncates the persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns the archive error when truncation fails. The in-memory
    /// clear stays in place.
    pub fn clear_all(&mut self) -> TaskArchiveResult<()> {
        self.store.clear();
        self.archive.clear()
    }

    /// Persists the current store without mutating it.
    ///
    /// # Errors
    ///
    /// Returns the archive error when the save fails.
    pub fn save(&self) -> TaskArchiveResult<()> {
        self.archive.save(&self.store)
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Returns the tasks in the given category, ignoring case.
    #[must_use]
    pub fn tasks_by_category(&self, category: &str) -> Vec<&Task> {
        self.store.by_category(category)
    }

    /// Returns the tasks matching the keyword in title or description.
    #[must_use]
    pub fn search_tasks(&self, keyword: &str) -> Vec<&Task> {
        self.store.search(keyword)
    }
}
