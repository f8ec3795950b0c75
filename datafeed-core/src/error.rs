//! Error types for datafeed-core

use std::io;
use std::path::PathBuf;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Output directory could not be created or resolved
    #[error("Failed to initialize for output path {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a CSV file failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Path the failed operation was working on
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::OutputDir { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// Underlying I/O error kind
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::OutputDir { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }
}
