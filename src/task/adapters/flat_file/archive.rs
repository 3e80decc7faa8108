//! Capability-scoped flat-file implementation of the archive port.

use super::record;
use crate::task::domain::TaskStore;
use crate::task::ports::{TaskArchive, TaskArchiveError, TaskArchiveResult};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Default location of the task data file, relative to the working
/// directory.
pub const DEFAULT_DATA_FILE: &str = "data/tasks.dat";

/// Archive persisting the store to one line-oriented text file.
///
/// Every save is a whole-file overwrite. There is no temp-file-then-rename
/// protection; a write failure partway through leaves the file inconsistent
/// until the next successful save.
#[derive(Debug)]
pub struct FlatFileArchive {
    dir: Dir,
    file_name: Utf8PathBuf,
    data_path: Utf8PathBuf,
}

impl FlatFileArchive {
    /// Opens an archive backed by the file at `data_path`, creating the
    /// containing directory if it does not exist yet.
    ///
    /// All later file access goes through a directory handle scoped to the
    /// containing directory.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the path has no file-name component or
    /// the containing directory cannot be created or opened.
    pub fn open(data_path: impl AsRef<Utf8Path>) -> io::Result<Self> {
        let data_path = data_path.as_ref();
        let file_name = data_path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("data path '{data_path}' has no file name"),
            )
        })?;
        let dir_path = data_path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or(Utf8Path::new("."));

        Dir::create_ambient_dir_all(dir_path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(dir_path, ambient_authority())?;
        Ok(Self {
            dir,
            file_name: file_name.into(),
            data_path: data_path.to_owned(),
        })
    }

    /// Returns the path of the backing data file.
    #[must_use]
    pub fn data_path(&self) -> &Utf8Path {
        &self.data_path
    }
}

impl TaskArchive for FlatFileArchive {
    fn save(&self, store: &TaskStore) -> TaskArchiveResult<()> {
        self.dir
            .write(&self.file_name, record::write_document(store))
            .map_err(TaskArchiveError::persistence)?;
        tracing::debug!(path = %self.data_path, records = store.len(), "store saved");
        Ok(())
    }

    fn load(&self, store: &mut TaskStore) -> TaskArchiveResult<()> {
        let document = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(TaskArchiveError::persistence)?;
        record::read_document(store, &document);
        tracing::debug!(path = %self.data_path, records = store.len(), "store loaded");
        Ok(())
    }

    fn clear(&self) -> TaskArchiveResult<()> {
        self.dir
            .write(&self.file_name, "")
            .map_err(TaskArchiveError::persistence)
    }
}
