//! Git-backed ingestion: resolve, clone, scan, render.

use ingest_digest::{DigestHeader, ScanLimits, ScanOptions, ingest_directory};
use ingest_git::{CloneOptions, RepoSource, prepare_checkout};

use super::IngestBackend;
use crate::{BackendError, BackendQuery, IngestResult};

/// Backend that clones the requested repository into a temporary directory
/// (or reads a local directory in place) and renders its digest.
#[derive(Debug, Clone, Default)]
pub struct GitIngestBackend {
    clone: CloneOptions,
    limits: ScanLimits,
}

impl GitIngestBackend {
    pub fn new(clone: CloneOptions, limits: ScanLimits) -> Self {
        Self { clone, limits }
    }
}

impl IngestBackend for GitIngestBackend {
    fn ingest(&self, query: &BackendQuery) -> Result<IngestResult, BackendError> {
        let source = RepoSource::parse(&query.url)?;

        // Compile filters before touching the network
        let options = ScanOptions::new(
            query.include_patterns.as_deref(),
            query.exclude_patterns.as_deref(),
            query.max_file_size,
        )?
        .with_limits(self.limits);

        let checkout = prepare_checkout(&source, query.branch.as_deref(), &self.clone)?;

        let header = DigestHeader::new(source.display_name())
            .with_branch(checkout.branch.clone())
            .with_commit(checkout.commit.as_ref().map(|c| c.hash.clone()))
            .with_subpath(source.subpath().map(str::to_string));

        let digest = ingest_directory(checkout.root(), &header, &options)?;

        tracing::info!(
            repository = %source.display_name(),
            temporary = checkout.is_temporary(),
            "Digest generated"
        );

        Ok(IngestResult {
            summary: digest.summary,
            tree: digest.tree,
            content: digest.content,
        })
    }
}
