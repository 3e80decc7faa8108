//! Archive port for whole-store persistence round trips.

use crate::task::domain::TaskStore;
use std::sync::Arc;
use thiserror::Error;

/// Result type for archive operations.
pub type TaskArchiveResult<T> = Result<T, TaskArchiveError>;

/// Whole-store persistence contract.
///
/// An archive mirrors the complete store: `save` replaces any previous
/// snapshot, `load` replays a snapshot into a store, `clear` discards the
/// snapshot without touching in-memory state. There is no incremental
/// update path.
pub trait TaskArchive {
    /// Writes the complete store contents, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskArchiveError::Persistence`] when the snapshot cannot
    /// be written. A failure partway through may leave the snapshot
    /// inconsistent; the next successful save repairs it.
    fn save(&self, store: &TaskStore) -> TaskArchiveResult<()>;

    /// Replays the persisted snapshot into `store`.
    ///
    /// Records the snapshot holds that cannot be decoded are skipped
    /// individually; only a snapshot that cannot be read at all is an
    /// error, in which case `store` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskArchiveError::Persistence`] when the snapshot cannot
    /// be opened or read.
    fn load(&self, store: &mut TaskStore) -> TaskArchiveResult<()>;

    /// Discards the persisted snapshot, independent of in-memory state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskArchiveError::Persistence`] when the snapshot cannot
    /// be truncated.
    fn clear(&self) -> TaskArchiveResult<()>;
}

/// Errors returned by archive implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskArchiveError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskArchiveError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
