//! Ingestion backend abstraction
//!
//! A backend turns a normalized [`BackendQuery`] into the three digest
//! parts. The facade treats it as one opaque, blocking call: no retries, no
//! progress, no cancellation. Async callers run it on a blocking thread.

mod git;

pub use git::GitIngestBackend;

use crate::{BackendError, BackendQuery, IngestResult};

/// Trait for repository ingestion implementations.
///
/// Implementations must be shareable across threads; the service holds one
/// instance behind an `Arc` for its whole lifetime.
pub trait IngestBackend: Send + Sync {
    /// Produce the digest for `query`.
    ///
    /// `include_patterns` / `exclude_patterns` arrive comma-joined or absent,
    /// and `max_file_size` is always resolved.
    fn ingest(&self, query: &BackendQuery) -> Result<IngestResult, BackendError>;
}
