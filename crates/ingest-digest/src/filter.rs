//! Glob pattern sets for include and exclude filtering
//!
//! Filters arrive as a single comma-separated string (the shape the
//! ingestion facade hands to its backend). Each entry is compiled with
//! [`glob::Pattern`] and matched against repository-relative paths.

use glob::Pattern;

use crate::constants::DEFAULT_EXCLUDES;
use crate::{Error, NormalizedPath, Result};

/// An ordered set of compiled glob patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// An empty set that matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated pattern list.
    ///
    /// `None`, the empty string and entries that are blank after trimming
    /// contribute nothing. A trailing `/` on an entry is dropped, so `docs/`
    /// and `docs` both name the `docs` directory.
    pub fn parse(list: Option<&str>) -> Result<Self> {
        let Some(list) = list else {
            return Ok(Self::empty());
        };

        let mut patterns = Vec::new();
        for raw in list.split(',') {
            let entry = raw.trim().trim_end_matches('/');
            if entry.is_empty() {
                continue;
            }
            patterns.push(compile(entry)?);
        }

        Ok(Self { patterns })
    }

    /// Patterns that every digest excludes.
    pub fn default_excludes() -> Self {
        let patterns = DEFAULT_EXCLUDES
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        Self { patterns }
    }

    /// Default excludes minus the entries an include set names.
    ///
    /// A default entry is dropped when it matches the text of an include
    /// pattern the way it would match a path: `*.svg` drops `*.svg` and
    /// `build/*` drops `build`. Wider includes such as `*.js` keep
    /// `node_modules` and `*.min.js` in force.
    pub fn default_excludes_except(include: &PatternSet) -> Self {
        let mut defaults = Self::default_excludes();
        defaults.patterns.retain(|default| {
            !include
                .patterns
                .iter()
                .any(|named| pattern_matches(default, &NormalizedPath::new(named.as_str())))
        });
        defaults
    }

    /// Combine two sets, keeping `self`'s patterns first.
    pub fn merged(mut self, other: &PatternSet) -> Self {
        self.patterns.extend(other.patterns.iter().cloned());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether any pattern matches `path`.
    ///
    /// A pattern matches when it matches the whole relative path, the
    /// file name, any ancestor directory path or any ancestor directory
    /// name. `tests/*`, `tests` and `*.py` therefore all behave the way a
    /// `.gitignore` user would expect.
    pub fn matches(&self, path: &NormalizedPath) -> bool {
        if path.is_root() {
            return false;
        }
        self.patterns.iter().any(|p| pattern_matches(p, path))
    }
}

fn compile(entry: &str) -> Result<Pattern> {
    Pattern::new(entry).map_err(|e| Error::InvalidPattern {
        pattern: entry.to_string(),
        message: e.msg.to_string(),
    })
}

fn pattern_matches(pattern: &Pattern, path: &NormalizedPath) -> bool {
    if pattern.matches(path.as_str()) || pattern.matches(path.file_name()) {
        return true;
    }

    path.ancestors().into_iter().any(|dir| {
        let name = dir.rsplit('/').next().unwrap_or(dir);
        pattern.matches(dir) || pattern.matches(name)
    })
}
