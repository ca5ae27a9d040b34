//! Error types for ingest-digest

use std::path::PathBuf;

/// Result type for ingest-digest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning and rendering a digest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Path '{subpath}' not found in repository")]
    SubpathNotFound { subpath: String },

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
