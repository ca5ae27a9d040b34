//! Filesystem traversal
//!
//! Walks a directory with `walkdir`, prunes excluded directories, applies
//! the include filter and the per-file size ceiling, and reads the bodies
//! of the files that survive.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use walkdir::{DirEntry, WalkDir};

use crate::constants::{
    BINARY_SNIFF_LEN, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILES, DEFAULT_MAX_TOTAL_SIZE,
};
use crate::{Error, NormalizedPath, PatternSet, Result};

/// Hard ceilings applied to a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanLimits {
    /// Stop adding files once this many have been included.
    pub max_files: usize,
    /// Do not descend deeper than this many directories below the root.
    pub max_depth: usize,
    /// Stop adding files once their combined size would exceed this.
    pub max_total_size: u64,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_depth: DEFAULT_MAX_DEPTH,
            max_total_size: DEFAULT_MAX_TOTAL_SIZE,
        }
    }
}

/// Filters and limits for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub include: PatternSet,
    /// User excludes merged with the default excludes the include set
    /// does not name.
    pub exclude: PatternSet,
    pub max_file_size: u64,
    pub limits: ScanLimits,
}

impl ScanOptions {
    /// Build options from the comma-separated filter strings.
    pub fn new(include: Option<&str>, exclude: Option<&str>, max_file_size: u64) -> Result<Self> {
        let include = PatternSet::parse(include)?;
        let defaults = PatternSet::default_excludes_except(&include);
        Ok(Self {
            exclude: PatternSet::parse(exclude)?.merged(&defaults),
            include,
            max_file_size,
            limits: ScanLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: ScanLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Body of a scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    Text(String),
    Binary,
}

/// A file that passed every filter.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: NormalizedPath,
    pub size: u64,
    pub body: FileBody,
}

/// Outcome of a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Included files in walk order.
    pub files: Vec<ScannedFile>,
    /// Files left out because they exceed the per-file ceiling.
    pub skipped_oversize: usize,
    /// Whether a [`ScanLimits`] ceiling cut the scan short.
    pub truncated: bool,
}

impl ScanReport {
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Scan `root` and collect every file that passes the filters.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanReport> {
    if !root.is_dir() {
        return Err(Error::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut report = ScanReport::default();
    let mut total_size: u64 = 0;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .max_depth(options.limits.max_depth.saturating_add(1))
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(root, entry, &options.exclude));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable subdirectories are skipped rather than failing the digest
                tracing::warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = relative(root, entry.path());
        if options.exclude.matches(&rel) {
            continue;
        }
        if !options.include.is_empty() && !options.include.matches(&rel) {
            continue;
        }

        let size = entry
            .metadata()
            .map_err(|e| Error::Walk {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            })?
            .len();

        if size > options.max_file_size {
            tracing::debug!(path = %rel, size, "Skipping file over size limit");
            report.skipped_oversize += 1;
            continue;
        }

        if report.files.len() >= options.limits.max_files
            || total_size.saturating_add(size) > options.limits.max_total_size
        {
            tracing::warn!(
                files = report.files.len(),
                total_size,
                "Scan limit reached, truncating digest"
            );
            report.truncated = true;
            break;
        }

        let body = read_body(entry.path())?;
        total_size += size;
        report.files.push(ScannedFile {
            path: rel,
            size,
            body,
        });
    }

    Ok(report)
}

fn relative(root: &Path, path: &Path) -> NormalizedPath {
    NormalizedPath::new(path.strip_prefix(root).unwrap_or(path))
}

fn is_excluded_dir(root: &Path, entry: &DirEntry, exclude: &PatternSet) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && exclude.matches(&relative(root, entry.path()))
}

/// Read a file, classifying it as binary when a NUL byte appears early on.
fn read_body(path: &Path) -> Result<FileBody> {
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(|e| Error::io(path, e))?;

    let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    if sniff.contains(&0) {
        return Ok(FileBody::Binary);
    }

    Ok(FileBody::Text(String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn paths(report: &ScanReport) -> Vec<&str> {
        report.files.iter().map(|f| f.path.as_str()).collect()
    }

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "README.md", b"# Demo\n");
        write(root, "src/main.py", b"print('hi')\n");
        write(root, "src/util.py", b"def f(): pass\n");
        write(root, "tests/test_main.py", b"def test(): pass\n");
        write(root, "node_modules/pkg/index.js", b"module.exports = 1;\n");
        write(root, ".git/HEAD", b"ref: refs/heads/main\n");
        temp
    }

    #[test]
    fn scans_everything_but_default_excludes() {
        let temp = fixture();
        let options = ScanOptions::new(None, None, u64::MAX).unwrap();
        let report = scan(temp.path(), &options).unwrap();

        assert_eq!(
            paths(&report),
            vec!["README.md", "src/main.py", "src/util.py", "tests/test_main.py"]
        );
        assert_eq!(report.skipped_oversize, 0);
        assert!(!report.truncated);
    }

    #[test]
    fn include_and_exclude_patterns_filter_files() {
        let temp = fixture();
        let options = ScanOptions::new(Some("*.py"), Some("tests/*"), u64::MAX).unwrap();
        let report = scan(temp.path(), &options).unwrap();

        assert_eq!(paths(&report), vec!["src/main.py", "src/util.py"]);
    }

    #[rstest]
    #[case("*.svg", vec!["icons/logo.svg"])]
    #[case("build/*", vec!["build/gen.py"])]
    fn include_brings_back_default_excluded_files(#[case] include: &str, #[case] expected: Vec<&str>) {
        let temp = fixture();
        write(temp.path(), "icons/logo.svg", b"<svg/>\n");
        write(temp.path(), "build/gen.py", b"print('gen')\n");

        let options = ScanOptions::new(Some(include), None, u64::MAX).unwrap();
        let report = scan(temp.path(), &options).unwrap();

        assert_eq!(paths(&report), expected);
    }

    #[test]
    fn user_exclude_still_beats_include() {
        let temp = fixture();
        write(temp.path(), "build/gen.py", b"print('gen')\n");

        let options = ScanOptions::new(Some("build/*"), Some("build"), u64::MAX).unwrap();
        let report = scan(temp.path(), &options).unwrap();

        assert!(report.files.is_empty());
    }

    #[test]
    fn oversized_files_are_counted_not_read() {
        let temp = fixture();
        write(temp.path(), "big.txt", &[b'x'; 64]);
        let options = ScanOptions::new(None, None, 20).unwrap();
        let report = scan(temp.path(), &options).unwrap();

        assert!(!paths(&report).contains(&"big.txt"));
        assert_eq!(report.skipped_oversize, 1);
    }

    #[test]
    fn binary_files_are_detected() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "blob.dat", &[0x7f, 0x45, 0x00, 0x01]);
        let options = ScanOptions::new(None, None, u64::MAX).unwrap();
        let report = scan(temp.path(), &options).unwrap();

        assert_eq!(report.files[0].body, FileBody::Binary);
    }

    #[test]
    fn max_files_truncates() {
        let temp = fixture();
        let limits = ScanLimits {
            max_files: 2,
            ..ScanLimits::default()
        };
        let options = ScanOptions::new(None, None, u64::MAX)
            .unwrap()
            .with_limits(limits);
        let report = scan(temp.path(), &options).unwrap();

        assert_eq!(report.files.len(), 2);
        assert!(report.truncated);
    }

    #[test]
    fn max_depth_limits_descent() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "top.txt", b"a");
        write(temp.path(), "a/b/c/deep.txt", b"b");
        let limits = ScanLimits {
            max_depth: 1,
            ..ScanLimits::default()
        };
        let options = ScanOptions::new(None, None, u64::MAX)
            .unwrap()
            .with_limits(limits);
        let report = scan(temp.path(), &options).unwrap();

        assert_eq!(paths(&report), vec!["top.txt"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let options = ScanOptions::new(None, None, u64::MAX).unwrap();
        let err = scan(&temp.path().join("nope"), &options).unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }));
    }
}
