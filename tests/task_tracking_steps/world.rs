//! Shared world state for task tracking BDD scenarios.

use aalto::task::adapters::memory::InMemoryTaskArchive;
use aalto::task::domain::TaskId;
use aalto::task::services::TaskTrackerService;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTrackerService = TaskTrackerService<InMemoryTaskArchive, DefaultClock>;

/// Scenario world for task tracking behaviour tests.
pub struct TaskWorld {
    /// Archive shared between service incarnations.
    pub archive: InMemoryTaskArchive,
    /// Service under test.
    pub service: TestTrackerService,
    /// Id of the most recently added task.
    pub tracked_id: Option<TaskId>,
    /// Titles produced by the latest search or listing.
    pub found_titles: Vec<String>,
}

impl TaskWorld {
    /// Creates a world over a fresh shared archive.
    #[must_use]
    pub fn new() -> Self {
        let archive = InMemoryTaskArchive::new();
        let service = TaskTrackerService::new(archive.clone(), DefaultClock);
        Self {
            archive,
            service,
            tracked_id: None,
            found_titles: Vec::new(),
        }
    }

    /// Replaces the service with a fresh one over the shared archive.
    pub fn reopen_service(&mut self) {
        self.service = TaskTrackerService::new(self.archive.clone(), DefaultClock);
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}
