//! Service orchestration tests for store/archive coordination.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::task::adapters::memory::InMemoryTaskArchive;
use crate::task::domain::{Priority, Task, TaskDraft, TaskId, TaskStore};
use crate::task::ports::{TaskArchive, TaskArchiveError, TaskArchiveResult};
use crate::task::services::TaskTrackerService;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskTrackerService<InMemoryTaskArchive, DefaultClock>;

mockall::mock! {
    Archive {}

    impl TaskArchive for Archive {
        fn save(&self, store: &TaskStore) -> TaskArchiveResult<()>;
        fn load(&self, store: &mut TaskStore) -> TaskArchiveResult<()>;
        fn clear(&self) -> TaskArchiveResult<()>;
    }
}

#[fixture]
fn archive() -> InMemoryTaskArchive {
    InMemoryTaskArchive::new()
}

fn service_over(archive: &InMemoryTaskArchive) -> TestService {
    TaskTrackerService::new(archive.clone(), DefaultClock)
}

#[rstest]
fn add_task_persists_a_snapshot_a_fresh_service_can_reload(archive: InMemoryTaskArchive) {
    let mut service = service_over(&archive);
    service.add_task(TaskDraft::new("Buy milk")).expect("save");

    let mut reopened = service_over(&archive);
    reopened.load().expect("load");

    let task = reopened.tasks().first().expect("one task");
    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.category(), "General");
    assert_eq!(task.priority(), Priority::Medium);
    assert!(!task.is_completed());
}

#[rstest]
fn toggle_unknown_id_reports_not_found_without_saving(archive: InMemoryTaskArchive) {
    let mut service = service_over(&archive);
    let found = service
        .toggle_completion(TaskId::new(99))
        .expect("no archive error");

    assert!(!found);
    assert_eq!(archive.document().expect("document"), "");
}

#[rstest]
fn delete_task_persists_the_surviving_records(archive: InMemoryTaskArchive) {
    let mut service = service_over(&archive);
    let keep = service.add_task(TaskDraft::new("keep")).expect("save");
    let doomed = service.add_task(TaskDraft::new("remove")).expect("save");

    assert!(service.delete_task(doomed).expect("no archive error"));

    let mut reopened = service_over(&archive);
    reopened.load().expect("load");
    let titles: Vec<&str> = reopened.tasks().iter().map(Task::title).collect();
    assert_eq!(titles, ["keep"]);
    assert!(reopened.find_task(keep).is_some());
}

#[rstest]
fn clear_all_truncates_the_snapshot_and_rewinds_ids(archive: InMemoryTaskArchive) {
    let mut service = service_over(&archive);
    service.add_task(TaskDraft::new("one")).expect("save");
    service.add_task(TaskDraft::new("two")).expect("save");

    service.clear_all().expect("no archive error");
    assert_eq!(archive.document().expect("document"), "");

    let mut reopened = service_over(&archive);
    reopened.load().expect("load");
    assert!(reopened.tasks().is_empty());
    assert_eq!(
        reopened.add_task(TaskDraft::new("fresh")).expect("save"),
        TaskId::new(1)
    );
}

#[rstest]
fn queries_delegate_to_the_store(archive: InMemoryTaskArchive) {
    let mut service = service_over(&archive);
    service
        .add_task(TaskDraft::new("report").with_category("Work"))
        .expect("save");
    service
        .add_task(TaskDraft::new("laundry").with_description("towels first"))
        .expect("save");

    assert_eq!(service.tasks_by_category("WORK").len(), 1);
    assert_eq!(service.search_tasks("towels").len(), 1);
}

#[rstest]
fn failing_save_keeps_the_in_memory_mutation() {
    let mut failing = MockArchive::new();
    failing
        .expect_save()
        .returning(|_| Err(TaskArchiveError::persistence(std::io::Error::other("disk full"))));

    let mut service = TaskTrackerService::new(failing, DefaultClock);
    let result = service.add_task(TaskDraft::new("still here"));

    assert!(result.is_err());
    assert_eq!(service.tasks().len(), 1);
}

#[rstest]
fn not_found_mutations_never_touch_the_archive() {
    let mut untouched = MockArchive::new();
    untouched.expect_save().times(0);

    let mut service = TaskTrackerService::new(untouched, DefaultClock);
    assert!(!service.delete_task(TaskId::new(7)).expect("no archive error"));
    assert!(!service.toggle_completion(TaskId::new(7)).expect("no archive error"));
}
