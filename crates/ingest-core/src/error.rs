//! Error types for ingest-core

use std::path::PathBuf;

/// Result type for ingest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ingest-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ingestion backend failed. Displays the backend's description
    /// unchanged.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Configuration file could not be read
    #[error("Failed to read configuration at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::AppConfig`]
    #[error("Failed to parse configuration at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

/// Failure reported by an [`crate::IngestBackend`].
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Source resolution or cloning failed
    #[error(transparent)]
    Git(#[from] ingest_git::Error),

    /// Filtering, traversal or rendering failed
    #[error(transparent)]
    Digest(#[from] ingest_digest::Error),

    /// Any other failure, described in free text
    #[error("{0}")]
    Failed(String),
}

impl BackendError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
