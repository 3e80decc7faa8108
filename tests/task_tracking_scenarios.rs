//! Behaviour tests for task tracking round trips.

mod task_tracking_steps;

use rstest_bdd_macros::scenario;
use task_tracking_steps::world::{TaskWorld, world};

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Add a task and find it by keyword search"
)]
fn add_and_search_task(world: TaskWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Toggling completion twice clears the completion timestamp"
)]
fn double_toggle_clears_timestamp(world: TaskWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Tasks survive a reload from the shared archive"
)]
fn tasks_survive_reload(world: TaskWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "A corrupted record line is skipped on reload"
)]
fn corrupted_line_is_skipped(world: TaskWorld) {
    let _ = world;
}
