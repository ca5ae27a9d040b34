//! Error types for ingest-git

use std::path::PathBuf;

/// Result type for ingest-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or cloning a repository
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid repository source '{input}': {reason}")]
    InvalidSource { input: String, reason: String },

    #[error("Local path not found: {path}")]
    LocalPathNotFound { path: PathBuf },

    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },

    #[error("Failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },
}
