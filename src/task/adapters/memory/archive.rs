//! In-memory archive for store round-trip and behaviour tests.

use crate::task::adapters::flat_file::record;
use crate::task::domain::TaskStore;
use crate::task::ports::{TaskArchive, TaskArchiveError, TaskArchiveResult};
use std::sync::{Arc, RwLock};

/// Archive keeping the encoded snapshot document in memory.
///
/// Clones share the same document, so a service can be rebuilt over a
/// cloned handle to exercise the reload path without touching disk. The
/// snapshot uses the same line codec as the flat-file archive.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskArchive {
    document: Arc<RwLock<String>>,
}

impl InMemoryTaskArchive {
    /// Creates an archive holding an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`TaskArchiveError::Persistence`] when the snapshot lock is
    /// poisoned.
    pub fn document(&self) -> TaskArchiveResult<String> {
        let document = self
            .document
            .read()
            .map_err(|err| TaskArchiveError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(document.clone())
    }

    /// Replaces the snapshot document wholesale.
    ///
    /// Intended for tests that need to seed a hand-written or deliberately
    /// corrupted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskArchiveError::Persistence`] when the snapshot lock is
    /// poisoned.
    pub fn set_document(&self, document: impl Into<String>) -> TaskArchiveResult<()> {
        let mut slot = self
            .document
            .write()
            .map_err(|err| TaskArchiveError::persistence(std::io::Error::other(err.to_string())))?;
        *slot = document.into();
        Ok(())
    }
}

impl TaskArchive for InMemoryTaskArchive {
    fn save(&self, store: &TaskStore) -> TaskArchiveResult<()> {
        self.set_document(record::write_document(store))
    }

    fn load(&self, store: &mut TaskStore) -> TaskArchiveResult<()> {
        let document = self.document()?;
        record::read_document(store, &document);
        Ok(())
    }

    fn clear(&self) -> TaskArchiveResult<()> {
        self.set_document(String::new())
    }
}
