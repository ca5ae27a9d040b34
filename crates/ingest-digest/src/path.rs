//! Repository-relative path handling

use std::path::Path;

/// A repository-relative path normalized to forward slashes.
///
/// Patterns are matched against this form and it is what the tree and
/// content sections print, so output is identical across platforms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    /// Always `/`-separated, without leading `./` or `/` and without a
    /// trailing slash
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let mut normalized = path_str.replace('\\', "/");

        while let Some(rest) = normalized.strip_prefix("./") {
            normalized = rest.to_string();
        }
        let trimmed = normalized.trim_matches('/');

        Self {
            inner: trimmed.to_string(),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether this is the repository root itself.
    pub fn is_root(&self) -> bool {
        self.inner.is_empty()
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        if self.inner.is_empty() {
            return Self::new(segment);
        }
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Get the parent directory, or `None` at the top level.
    pub fn parent(&self) -> Option<Self> {
        self.inner.rfind('/').map(|idx| Self {
            inner: self.inner[..idx].to_string(),
        })
    }

    /// Get the file name component.
    pub fn file_name(&self) -> &str {
        self.inner.rsplit('/').next().unwrap_or("")
    }

    /// Iterate the `/`-separated components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|c| !c.is_empty())
    }

    /// Number of components in the path.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// All proper ancestor directories, shallowest first.
    ///
    /// `a/b/c.rs` yields `a` then `a/b`.
    pub fn ancestors(&self) -> Vec<&str> {
        self.inner
            .match_indices('/')
            .map(|(idx, _)| &self.inner[..idx])
            .collect()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
