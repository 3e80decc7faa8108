//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing priorities from user or persisted input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
