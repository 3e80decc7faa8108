//! Menu flows driving the tracker service from line-oriented input.
//!
//! Every mutating flow persists through the service immediately; archive
//! failures are logged at warn level rather than shown inline, because
//! persistence is best-effort and the in-memory change has already taken
//! place.

use crate::{input, ui};
use aalto::task::domain::TaskDraft;
use aalto::task::ports::TaskArchive;
use aalto::task::services::TaskTrackerService;
use mockable::Clock;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Prompt for a new task.
    AddTask,
    /// List every task.
    ViewAll,
    /// List tasks in one category.
    ViewByCategory,
    /// Flip a task's completion state.
    ToggleCompletion,
    /// Remove a task.
    DeleteTask,
    /// Keyword search over titles and descriptions.
    SearchTasks,
    /// Wipe the store and its snapshot.
    ClearAll,
    /// Save and leave.
    Exit,
}

/// Errors produced while parsing a menu selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuInputError {
    /// The input was not a number at all.
    #[error("Invalid input! Please enter a number.")]
    NotANumber,

    /// The number does not correspond to a menu entry.
    #[error("Invalid option! Please try again.")]
    OutOfRange,
}

impl MenuChoice {
    /// Parses the typed menu selection.
    pub fn parse(raw: &str) -> Result<Self, MenuInputError> {
        let number: u8 = raw.parse().map_err(|_| MenuInputError::NotANumber)?;
        match number {
            0 => Ok(Self::Exit),
            1 => Ok(Self::AddTask),
            2 => Ok(Self::ViewAll),
            3 => Ok(Self::ViewByCategory),
            4 => Ok(Self::ToggleCompletion),
            5 => Ok(Self::DeleteTask),
            6 => Ok(Self::SearchTasks),
            7 => Ok(Self::ClearAll),
            _ => Err(MenuInputError::OutOfRange),
        }
    }
}

/// Runs the menu loop until the user exits or input ends.
pub fn run<A, C, R, W>(
    service: &mut TaskTrackerService<A, C>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    R: BufRead,
    W: Write,
{
    loop {
        ui::clear_screen(out)?;
        ui::print_header(out, "TASK TRACKER")?;
        ui::print_menu(out)?;

        let line = match input::prompt(out, input, "Enter your choice: ") {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return finish(service, out);
            }
            Err(err) => return Err(err),
        };

        let outcome = match MenuChoice::parse(&line) {
            Ok(MenuChoice::Exit) => return finish(service, out),
            Ok(MenuChoice::AddTask) => add_task(service, input, out),
            Ok(MenuChoice::ViewAll) => view_all_tasks(service, out),
            Ok(MenuChoice::ViewByCategory) => view_by_category(service, input, out),
            Ok(MenuChoice::ToggleCompletion) => toggle_task(service, input, out),
            Ok(MenuChoice::DeleteTask) => delete_task(service, input, out),
            Ok(MenuChoice::SearchTasks) => search_tasks(service, input, out),
            Ok(MenuChoice::ClearAll) => clear_all_tasks(service, input, out),
            Err(err) => ui::print_error(out, &err.to_string()),
        };

        match outcome {
            Ok(()) => input::wait_for_enter(out, input)?,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return finish(service, out);
            }
            Err(err) => return Err(err),
        }
    }
}

/// Performs the final save and prints the goodbye line.
fn finish<A, C, W>(service: &TaskTrackerService<A, C>, out: &mut W) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    W: Write,
{
    if let Err(err) = service.save() {
        tracing::warn!(%err, "failed to persist tasks on exit");
    }
    ui::print_success(out, "Tasks saved. Goodbye!")
}

/// Prompts for the fields of a new task and adds it.
fn add_task<A, C, R, W>(
    service: &mut TaskTrackerService<A, C>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let title = input::prompt(out, input, "Enter task title: ")?;
    if title.is_empty() {
        return ui::print_error(out, "Task title cannot be empty!");
    }

    let description = input::prompt(out, input, "Enter description (optional): ")?;
    let category = input::prompt(out, input, "Enter category (default: General): ")?;
    let due_date = input::prompt(out, input, "Enter due date (YYYY-MM-DD, optional): ")?;
    let priority_input = input::prompt(
        out,
        input,
        "Enter priority (High/Medium/Low, default: Medium): ",
    )?;

    let mut draft = TaskDraft::new(title).with_description(description);
    if !category.is_empty() {
        draft = draft.with_category(category);
    }
    if !due_date.is_empty() {
        if input::is_valid_due_date(&due_date) {
            draft = draft.with_due_date(due_date);
        } else {
            ui::print_error(out, "Invalid date format! Leaving the due date unset.")?;
        }
    }
    let priority = input::parse_priority(&priority_input);
    if priority.is_none() {
        ui::print_error(out, "Unrecognised priority! Using Medium.")?;
    }
    draft = draft.with_priority(priority.unwrap_or_default());

    if let Err(err) = service.add_task(draft) {
        tracing::warn!(%err, "failed to persist new task");
    }
    ui::print_success(out, "Task added successfully!")
}

/// Lists every task.
fn view_all_tasks<A, C, W>(service: &TaskTrackerService<A, C>, out: &mut W) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    W: Write,
{
    ui::clear_screen(out)?;
    ui::print_header(out, "ALL TASKS")?;
    let tasks: Vec<_> = service.tasks().iter().collect();
    ui::print_task_list(out, &tasks)
}

/// Prompts for a category and lists its tasks.
fn view_by_category<A, C, R, W>(
    service: &TaskTrackerService<A, C>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let category = input::prompt(out, input, "Enter category name: ")?;
    if category.is_empty() {
        return ui::print_error(out, "Category name cannot be empty!");
    }

    ui::clear_screen(out)?;
    ui::print_header(out, &format!("TASKS IN CATEGORY: {category}"))?;
    ui::print_task_list(out, &service.tasks_by_category(&category))
}

/// Prompts for an id and flips that task's completion state.
fn toggle_task<A, C, R, W>(
    service: &mut TaskTrackerService<A, C>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let raw_id = input::prompt(out, input, "Enter task number to toggle: ")?;
    let Some(id) = input::parse_task_id(&raw_id) else {
        return ui::print_error(out, "Invalid task number!");
    };

    match service.toggle_completion(id) {
        Ok(true) => ui::print_success(out, "Task status toggled successfully!"),
        Ok(false) => ui::print_error(out, "Task not found!"),
        Err(err) => {
            tracing::warn!(%err, "failed to persist completion toggle");
            ui::print_success(out, "Task status toggled successfully!")
        }
    }
}

/// Prompts for an id and deletes that task.
fn delete_task<A, C, R, W>(
    service: &mut TaskTrackerService<A, C>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let raw_id = input::prompt(out, input, "Enter task number to delete: ")?;
    let Some(id) = input::parse_task_id(&raw_id) else {
        return ui::print_error(out, "Invalid task number!");
    };

    match service.delete_task(id) {
        Ok(true) => ui::print_success(out, "Task deleted successfully!"),
        Ok(false) => ui::print_error(out, "Task not found!"),
        Err(err) => {
            tracing::warn!(%err, "failed to persist task deletion");
            ui::print_success(out, "Task deleted successfully!")
        }
    }
}

/// Prompts for a keyword and lists matching tasks.
fn search_tasks<A, C, R, W>(
    service: &TaskTrackerService<A, C>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let keyword = input::prompt(out, input, "Enter search keyword: ")?;
    if keyword.is_empty() {
        return ui::print_error(out, "Search keyword cannot be empty!");
    }

    ui::clear_screen(out)?;
    ui::print_header(out, &format!("SEARCH RESULTS: {keyword}"))?;
    ui::print_task_list(out, &service.search_tasks(&keyword))
}

/// Confirms and wipes the store and its snapshot.
fn clear_all_tasks<A, C, R, W>(
    service: &mut TaskTrackerService<A, C>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    A: TaskArchive,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let confirmation = input::prompt(out, input, "Are you sure you want to clear ALL tasks? (yes/no): ")?;
    if confirmation.to_lowercase() == "yes" {
        if let Err(err) = service.clear_all() {
            tracing::warn!(%err, "failed to truncate the task snapshot");
        }
        ui::print_success(out, "All tasks cleared!")
    } else {
        ui::print_info(out, "Operation cancelled.")
    }
}
