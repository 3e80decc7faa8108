//! Line codec between task records and their persisted text form.
//!
//! A snapshot document is the store's `next_id` on the first line followed
//! by one record per line: nine `|`-separated fields in fixed order. Free-
//! text fields are written verbatim with no escaping, so a `|` inside a
//! title corrupts that record on the next read; the documented recovery is
//! to skip the line, not to repair it.

use crate::task::domain::{PersistedTaskData, Priority, Task, TaskId, TaskStore};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Delimiter between record fields.
const FIELD_SEPARATOR: char = '|';

/// Number of fields in one persisted record line.
const FIELD_COUNT: usize = 9;

/// Value persisted for an unset completion timestamp.
const UNSET_TIMESTAMP: i64 = 0;

/// Errors produced while decoding a persisted record line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordParseError {
    /// The line does not split into the expected number of fields.
    #[error("invalid record format: expected 9 fields, found {0}")]
    InvalidRecordFormat(usize),

    /// A numeric field failed to parse as an integer.
    #[error("invalid {field} field: '{value}'")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field contents.
        value: String,
    },

    /// The priority ordinal is outside the known range.
    #[error("unknown priority ordinal: {0}")]
    UnknownPriority(u8),

    /// A timestamp field lies outside the representable range.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

/// Encodes one task as a single record line (without trailing newline).
#[must_use]
pub fn encode(task: &Task) -> String {
    let completed_at = task
        .completed_at()
        .map_or(UNSET_TIMESTAMP, |at| at.timestamp());
    format!(
        "{id}|{title}|{description}|{category}|{due_date}|{priority}|{completed}|{created_at}|{completed_at}",
        id = task.id(),
        title = task.title(),
        description = task.description(),
        category = task.category(),
        due_date = task.due_date().unwrap_or_default(),
        priority = task.priority().ordinal(),
        completed = u8::from(task.is_completed()),
        created_at = task.created_at().timestamp(),
    )
}

/// Decodes one record line into persisted task data.
///
/// # Errors
///
/// Returns [`RecordParseError`] when the line does not hold exactly nine
/// fields, a numeric field is not an integer, the priority ordinal is
/// unknown, or a timestamp cannot be represented.
pub fn decode(line: &str) -> Result<PersistedTaskData, RecordParseError> {
    let fields: [&str; FIELD_COUNT] = line
        .split(FIELD_SEPARATOR)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|found: Vec<&str>| RecordParseError::InvalidRecordFormat(found.len()))?;
    let [id, title, description, category, due_date, priority, completed, created_at, completed_at] =
        fields;

    let ordinal = parse_integer::<u8>("priority", priority)?;
    Ok(PersistedTaskData {
        id: TaskId::new(parse_integer("id", id)?),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        due_date: (!due_date.is_empty()).then(|| due_date.to_owned()),
        priority: Priority::from_ordinal(ordinal)
            .ok_or(RecordParseError::UnknownPriority(ordinal))?,
        completed: completed == "1",
        created_at: parse_timestamp("created-at", created_at)?,
        completed_at: parse_optional_timestamp(completed_at)?,
    })
}

/// Renders the whole store as a snapshot document.
#[must_use]
pub fn write_document(store: &TaskStore) -> String {
    let mut document = format!("{}\n", store.next_id());
    for task in store.tasks() {
        document.push_str(&encode(task));
        document.push('\n');
    }
    document
}

/// Replays a snapshot document into `store`.
///
/// The header line becomes a floor for the store's id counter; an
/// unparseable header is ignored rather than treated as fatal. Record lines
/// are decoded independently, and a line that fails to decode is skipped
/// with a debug trace so one corrupt record never aborts the rest.
pub fn read_document(store: &mut TaskStore, document: &str) {
    let mut lines = document.lines();
    if let Some(header) = lines.next() {
        if let Ok(floor) = header.trim().parse() {
            store.ensure_next_id_at_least(floor);
        }
    }

    for line in lines {
        match decode(line) {
            Ok(data) => store.restore(data),
            Err(err) => tracing::debug!(%err, line, "skipped unreadable task record"),
        }
    }
}

fn parse_integer<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, RecordParseError> {
    value.parse().map_err(|_| RecordParseError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, RecordParseError> {
    let seconds = parse_integer::<i64>(field, value)?;
    DateTime::from_timestamp(seconds, 0).ok_or(RecordParseError::TimestampOutOfRange(seconds))
}

fn parse_optional_timestamp(value: &str) -> Result<Option<DateTime<Utc>>, RecordParseError> {
    let seconds = parse_integer::<i64>("completed-at", value)?;
    if seconds == UNSET_TIMESTAMP {
        return Ok(None);
    }
    DateTime::from_timestamp(seconds, 0)
        .map(Some)
        .ok_or(RecordParseError::TimestampOutOfRange(seconds))
}
