//! Start-up configuration for the tracker binary.
//!
//! The data-file location is an explicit value resolved once at start-up:
//! the `--data-file` flag wins, then the `data_file` key of the JSON
//! payload named by `--config`, then the built-in default.

use aalto::task::adapters::flat_file::DEFAULT_DATA_FILE;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::io;
use thiserror::Error;

/// Errors raised while resolving start-up configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path the user supplied.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        /// Path the user supplied.
        path: Utf8PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

/// JSON configuration payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Path of the task data file.
    pub data_file: Option<Utf8PathBuf>,
}

/// Resolves the data-file path from flag, config file, and default.
///
/// A `--config` path that cannot be read or parsed is an error; the user
/// asked for that file explicitly.
pub fn resolve_data_file(
    flag: Option<Utf8PathBuf>,
    config_path: Option<&Utf8Path>,
) -> Result<Utf8PathBuf, ConfigError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = config_path {
        let parsed = load_config(path)?;
        if let Some(data_file) = parsed.data_file {
            return Ok(data_file);
        }
    }
    Ok(Utf8PathBuf::from(DEFAULT_DATA_FILE))
}

/// Reads and parses the JSON payload at `path`.
fn load_config(path: &Utf8Path) -> Result<AppConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Reads the file through a directory handle scoped to its parent.
fn read_config_file(path: &Utf8Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("config path '{path}' has no file name"),
        )
    })?;
    let dir_path = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or(Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(dir_path, ambient_authority())?;
    dir.read_to_string(file_name)
}
