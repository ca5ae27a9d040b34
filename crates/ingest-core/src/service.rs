//! The ingestion facade

use std::sync::Arc;

use crate::{BackendQuery, IngestBackend, IngestRequest, IngestResult, Result, ServiceConfig};

/// Separator between pattern entries in a [`BackendQuery`].
pub const PATTERN_DELIMITER: &str = ",";

/// Separator placed between the summary, tree and content sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Facade between the tool endpoint and an [`IngestBackend`].
///
/// Holds no per-call state: the backend and the configuration are fixed at
/// construction, so one service can serve concurrent calls and several
/// services with different defaults can coexist.
#[derive(Clone)]
pub struct IngestionService {
    backend: Arc<dyn IngestBackend>,
    config: ServiceConfig,
}

impl std::fmt::Debug for IngestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestionService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl IngestionService {
    pub fn new(backend: Arc<dyn IngestBackend>, config: ServiceConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Normalize a request into the shape the backend accepts.
    pub fn build_query(&self, request: &IngestRequest) -> BackendQuery {
        BackendQuery {
            url: request.url.clone(),
            branch: request.branch.clone(),
            include_patterns: join_patterns(request.include_patterns.as_deref()),
            exclude_patterns: join_patterns(request.exclude_patterns.as_deref()),
            max_file_size: request.max_size.unwrap_or(self.config.default_max_size),
        }
    }

    /// Ingest a repository and return the formatted digest.
    ///
    /// Blocks for the duration of the backend call. Backend failures are
    /// logged and returned unchanged.
    pub fn ingest_repository(&self, request: &IngestRequest) -> Result<String> {
        tracing::info!(url = %request.url, branch = ?request.branch, "Ingesting repository");

        let query = self.build_query(request);
        match self.backend.ingest(&query) {
            Ok(result) => Ok(format_digest(&result)),
            Err(e) => {
                tracing::error!(url = %request.url, error = %e, "Failed to ingest repository");
                Err(e.into())
            }
        }
    }
}

/// Join a pattern list with `,`. Absent and empty lists become `None`.
pub fn join_patterns(patterns: Option<&[String]>) -> Option<String> {
    match patterns {
        Some(list) if !list.is_empty() => Some(list.join(PATTERN_DELIMITER)),
        _ => None,
    }
}

/// `summary`, `tree` and `content` separated by blank lines, verbatim.
pub fn format_digest(result: &IngestResult) -> String {
    [
        result.summary.as_str(),
        result.tree.as_str(),
        result.content.as_str(),
    ]
    .join(SECTION_SEPARATOR)
}
