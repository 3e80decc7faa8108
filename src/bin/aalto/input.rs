//! Line-oriented input reading and validation helpers.
//!
//! Field validation lives here, in front of the store: the data model
//! accepts whatever it is given, so titles, due dates, and numeric ids are
//! checked before a draft or lookup is built.

use aalto::task::domain::{Priority, TaskId};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

/// Length of a well-formed `YYYY-MM-DD` value.
const DUE_DATE_LENGTH: usize = 10;

/// Writes `label`, flushes, and reads one trimmed line of input.
pub fn prompt(
    out: &mut impl Write,
    input: &mut impl BufRead,
    label: &str,
) -> io::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    read_trimmed_line(input)
}

/// Reads one line, trimming surrounding whitespace.
///
/// Returns `ErrorKind::UnexpectedEof` when the stream is exhausted, which
/// the menu loop treats as a request to exit.
pub fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_owned())
}

/// Blocks until the user presses Enter.
///
/// End-of-input is tolerated here; the next prompt reports it.
pub fn wait_for_enter(out: &mut impl Write, input: &mut impl BufRead) -> io::Result<()> {
    write!(out, "\nPress Enter to continue...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Parses a task id typed by the user.
#[must_use]
pub fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.parse().ok()
}

/// Checks a due date: exactly ten characters and a real calendar date in
/// `YYYY-MM-DD` form.
#[must_use]
pub fn is_valid_due_date(raw: &str) -> bool {
    raw.len() == DUE_DATE_LENGTH && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

/// Parses priority input, defaulting to Medium for empty input.
///
/// Returns `None` for unrecognised input so the caller can report it.
#[must_use]
pub fn parse_priority(raw: &str) -> Option<Priority> {
    if raw.is_empty() {
        return Some(Priority::default());
    }
    Priority::try_from(raw).ok()
}
