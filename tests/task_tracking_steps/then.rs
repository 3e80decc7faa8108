//! Then steps for task tracking BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::then;

#[then("exactly one task is found")]
fn exactly_one_task_found(world: &mut TaskWorld) {
    assert_eq!(world.found_titles.len(), 1);
}

#[then("exactly two tasks are found")]
fn exactly_two_tasks_found(world: &mut TaskWorld) {
    assert_eq!(world.found_titles.len(), 2);
}

#[then(r#"the found task is titled "{title}""#)]
fn found_task_is_titled(world: &mut TaskWorld, title: String) {
    assert_eq!(world.found_titles, [title]);
}

#[then("the task is not completed")]
fn task_is_not_completed(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .ok_or_else(|| eyre::eyre!("no task tracked in scenario world"))?;
    let task = world
        .service
        .find_task(id)
        .ok_or_else(|| eyre::eyre!("tracked task not found in store"))?;
    eyre::ensure!(!task.is_completed(), "task unexpectedly completed");
    Ok(())
}

#[then("the task has no completion timestamp")]
fn task_has_no_completion_timestamp(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .ok_or_else(|| eyre::eyre!("no task tracked in scenario world"))?;
    let task = world
        .service
        .find_task(id)
        .ok_or_else(|| eyre::eyre!("tracked task not found in store"))?;
    eyre::ensure!(
        task.completed_at().is_none(),
        "completion timestamp unexpectedly set"
    );
    Ok(())
}
