//! Values passed across the facade

use serde::{Deserialize, Serialize};

/// Parameters of one `ingest_repo` call, as the tool endpoint receives them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    /// Repository location. Not validated here; the backend decides.
    pub url: String,

    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default)]
    pub include_patterns: Option<Vec<String>>,

    #[serde(default)]
    pub exclude_patterns: Option<Vec<String>>,

    /// Per-file byte ceiling. `None` means the service default.
    #[serde(default)]
    pub max_size: Option<u64>,
}

impl IngestRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }
}

/// Normalized parameters handed to an [`crate::IngestBackend`].
///
/// Pattern lists are comma-joined strings or `None`, never sequences, and
/// the size ceiling is always resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendQuery {
    pub url: String,
    pub branch: Option<String>,
    pub include_patterns: Option<String>,
    pub exclude_patterns: Option<String>,
    pub max_file_size: u64,
}

/// The three digest parts a backend produces. Opaque to the facade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestResult {
    pub summary: String,
    pub tree: String,
    pub content: String,
}

impl IngestResult {
    pub fn new(
        summary: impl Into<String>,
        tree: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            tree: tree.into(),
            content: content.into(),
        }
    }
}
