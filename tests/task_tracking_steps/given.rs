//! Given steps for task tracking BDD scenarios.

use super::world::TaskWorld;
use aalto::task::adapters::flat_file::record;
use aalto::task::domain::{PersistedTaskData, Priority, Task, TaskDraft, TaskId};
use chrono::DateTime;
use eyre::WrapErr;
use rstest_bdd_macros::given;

fn persisted(id: u64, title: &str) -> Result<PersistedTaskData, eyre::Report> {
    Ok(PersistedTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: String::new(),
        category: "General".to_owned(),
        due_date: None,
        priority: Priority::Medium,
        completed: false,
        created_at: DateTime::from_timestamp(1_700_000_000, 0)
            .ok_or_else(|| eyre::eyre!("timestamp out of range"))?,
        completed_at: None,
    })
}

#[given("an empty task tracker")]
fn empty_task_tracker(world: &mut TaskWorld) {
    assert!(world.service.tasks().is_empty());
}

#[given(r#"a task titled "{title}" has been added"#)]
fn task_already_added(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .service
        .add_task(TaskDraft::new(title))
        .wrap_err("add initial task")?;
    world.tracked_id = Some(id);
    Ok(())
}

#[given("an archive snapshot with a corrupted line between two valid records")]
fn corrupted_snapshot(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let document = format!(
        "3\n{}\nbroken|line\n{}\n",
        record::encode(&Task::from_persisted(persisted(1, "first")?)),
        record::encode(&Task::from_persisted(persisted(2, "second")?)),
    );
    world
        .archive
        .set_document(document)
        .wrap_err("seed corrupted snapshot")?;
    Ok(())
}
