//! Terminal rendering for the interactive tracker.
//!
//! Every function writes to an injected handle so rendering can be
//! asserted against an in-memory buffer in tests.

use aalto::task::domain::{Priority, Task};
use chrono::{DateTime, Local, Utc};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Width assumed when the terminal cannot be probed or is implausibly
/// narrow.
const FALLBACK_WIDTH: usize = 80;

/// Narrowest width treated as a real terminal.
const MIN_WIDTH: usize = 20;

/// Clears the screen and homes the cursor.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Draws a full-width boxed header with the title centred.
pub fn print_header(out: &mut impl Write, title: &str) -> io::Result<()> {
    let width = terminal_width();
    let line = "═".repeat(width.saturating_sub(2));
    let text_area = width.saturating_sub(4);
    let left = text_area.saturating_sub(title.width()).div_euclid(2);
    let right = text_area.saturating_sub(title.width().saturating_add(left));

    writeln!(out)?;
    writeln!(out, "{}", format!("╔{line}╗").cyan().bold())?;
    writeln!(
        out,
        "{}",
        format!("║ {}{title}{} ║", " ".repeat(left), " ".repeat(right))
            .cyan()
            .bold()
    )?;
    writeln!(out, "{}", format!("╚{line}╝").cyan().bold())?;
    writeln!(out)
}

/// Prints the numbered menu.
pub fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "╔══ MENU ══╗".bold())?;
    writeln!(out, " 1. Add Task")?;
    writeln!(out, " 2. View All Tasks")?;
    writeln!(out, " 3. View by Category")?;
    writeln!(out, " 4. Toggle Task Completion")?;
    writeln!(out, " 5. Delete Task")?;
    writeln!(out, " 6. Search Tasks")?;
    writeln!(out, " 7. Clear All Tasks")?;
    writeln!(out, " 0. Exit")?;
    writeln!(out)
}

/// Prints the given tasks, or an informational line when there are none.
pub fn print_task_list(out: &mut impl Write, tasks: &[&Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return print_info(out, "No tasks found.");
    }
    for task in tasks {
        print_task(out, task)?;
    }
    Ok(())
}

/// Prints a green success line.
pub fn print_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("✓ {message}").green())
}

/// Prints a red error line.
pub fn print_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("✗ {message}").red())
}

/// Prints a blue informational line.
pub fn print_info(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("ℹ {message}").blue())
}

/// Prints one task, led by the id the toggle and delete prompts accept.
fn print_task(out: &mut impl Write, task: &Task) -> io::Result<()> {
    let color = priority_color(task.priority());
    let status = if task.is_completed() {
        format!("{}", "[✓]".green())
    } else {
        "[ ]".to_owned()
    };

    writeln!(
        out,
        "{id}. {status} {title}",
        id = task.id(),
        title = task.title().with(color).bold()
    )?;
    if !task.description().is_empty() {
        writeln!(out, "   Description: {}", task.description())?;
    }
    write!(
        out,
        "   Category: {} | Priority: {}",
        task.category().magenta(),
        task.priority().as_str().with(color)
    )?;
    if let Some(due_date) = task.due_date() {
        write!(out, " | Due: {}", due_date.cyan())?;
    }
    writeln!(out)?;
    write!(out, "   Created: {}", format_timestamp(Some(task.created_at())))?;
    if task.is_completed() {
        write!(out, " | Completed: {}", format_timestamp(task.completed_at()))?;
    }
    writeln!(out)?;
    writeln!(out)
}

/// Maps a priority to its display colour.
const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Formats a timestamp in local time, or `N/A` when unset.
fn format_timestamp(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(
        || "N/A".to_owned(),
        |stamp| {
            stamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}

/// Returns the terminal width, falling back when probing fails or reports
/// an implausibly narrow screen.
fn terminal_width() -> usize {
    let width = terminal::size().map_or(FALLBACK_WIDTH, |(columns, _)| usize::from(columns));
    if width < MIN_WIDTH { FALLBACK_WIDTH } else { width }
}
