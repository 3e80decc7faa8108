//! When steps for task tracking BDD scenarios.

use super::world::TaskWorld;
use aalto::task::domain::{Task, TaskDraft};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" with description "{description}" is added"#)]
fn add_task_with_description(
    world: &mut TaskWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let id = world
        .service
        .add_task(TaskDraft::new(title).with_description(description))
        .wrap_err("add task")?;
    world.tracked_id = Some(id);
    Ok(())
}

#[when(r#"tasks are searched for "{keyword}""#)]
fn search_tasks(world: &mut TaskWorld, keyword: String) {
    world.found_titles = world
        .service
        .search_tasks(&keyword)
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
}

#[when("the task completion is toggled")]
fn toggle_tracked_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .ok_or_else(|| eyre::eyre!("no task tracked in scenario world"))?;
    let found = world
        .service
        .toggle_completion(id)
        .wrap_err("toggle completion")?;
    eyre::ensure!(found, "tracked task not found in store");
    Ok(())
}

#[when("the tracker is reopened over the same archive")]
fn reopen_tracker(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    world.reopen_service();
    world.service.load().wrap_err("reload snapshot")?;
    world.found_titles = world
        .service
        .tasks()
        .iter()
        .map(Task::title)
        .map(str::to_owned)
        .collect();
    Ok(())
}
