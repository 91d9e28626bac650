//! Error type for manifest loading.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raised when a manifest cannot be read (missing file, permission denied,
/// invalid UTF-8, or any other I/O failure). Always fatal to a run.
#[derive(Debug, Error)]
#[error("Error reading config file {}: {source}", .path.display())]
pub struct ConfigLoadError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl ConfigLoadError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Path of the manifest that failed to load.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
