//! Digest assembly: summary, tree and content sections

use std::collections::HashMap;
use std::path::Path;

use crate::constants::{BINARY_PLACEHOLDER, FILE_SEPARATOR};
use crate::{DirTree, Error, FileBody, NormalizedPath, Result, ScanOptions, ScanReport, scan};

/// Descriptive fields printed at the top of the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestHeader {
    /// Repository display name, e.g. `user/repo` or a directory name.
    pub repository: String,
    pub branch: Option<String>,
    /// Short id of the commit that was checked out.
    pub commit: Option<String>,
    /// Sub-directory the digest was restricted to.
    pub subpath: Option<String>,
}

impl DigestHeader {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ..Self::default()
        }
    }

    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn with_commit(mut self, commit: Option<String>) -> Self {
        self.commit = commit;
        self
    }

    pub fn with_subpath(mut self, subpath: Option<String>) -> Self {
        self.subpath = subpath;
        self
    }

    /// Name of the tree root: the last segment of the subpath, or of the
    /// repository name.
    fn root_name(&self) -> &str {
        let source = self.subpath.as_deref().unwrap_or(&self.repository);
        source
            .trim_end_matches('/')
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or("repository")
    }
}

/// The three rendered digest parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub summary: String,
    pub tree: String,
    pub content: String,
}

/// Scan `root` (optionally below `header.subpath`) and render its digest.
pub fn ingest_directory(root: &Path, header: &DigestHeader, options: &ScanOptions) -> Result<Digest> {
    let scan_root = match header.subpath.as_deref() {
        Some(subpath) => {
            let rel = NormalizedPath::new(subpath);
            let dir = root.join(rel.as_str());
            if !dir.is_dir() {
                return Err(Error::SubpathNotFound {
                    subpath: subpath.to_string(),
                });
            }
            dir
        }
        None => root.to_path_buf(),
    };

    tracing::debug!(root = %scan_root.display(), "Scanning directory");
    let report = scan(&scan_root, options)?;
    Ok(render(header, options, &report))
}

/// Render a digest from an already completed scan.
pub fn render(header: &DigestHeader, options: &ScanOptions, report: &ScanReport) -> Digest {
    let tree = DirTree::from_paths(report.files.iter().map(|f| &f.path));
    let tree_text = tree.render(header.root_name());

    let by_path: HashMap<&NormalizedPath, &FileBody> =
        report.files.iter().map(|f| (&f.path, &f.body)).collect();
    let mut content = String::new();
    for path in tree.ordered_paths() {
        if let Some(body) = by_path.get(&path) {
            content.push_str(&render_file(&path, body));
        }
    }

    let tokens = estimate_tokens(&tree_text) + estimate_tokens(&content);
    let summary = render_summary(header, options, report, tokens);

    Digest {
        summary,
        tree: tree_text,
        content,
    }
}

fn render_file(path: &NormalizedPath, body: &FileBody) -> String {
    let text = match body {
        FileBody::Text(text) => text.as_str(),
        FileBody::Binary => BINARY_PLACEHOLDER,
    };
    format!("{FILE_SEPARATOR}\nFILE: {path}\n{FILE_SEPARATOR}\n{text}\n\n")
}

fn render_summary(
    header: &DigestHeader,
    options: &ScanOptions,
    report: &ScanReport,
    tokens: usize,
) -> String {
    let mut lines = vec![format!("Repository: {}", header.repository)];
    if let Some(branch) = &header.branch {
        lines.push(format!("Branch: {branch}"));
    }
    if let Some(commit) = &header.commit {
        lines.push(format!("Commit: {commit}"));
    }
    if let Some(subpath) = &header.subpath {
        lines.push(format!("Subpath: {subpath}"));
    }
    lines.push(format!("Files analyzed: {}", report.files.len()));
    if report.skipped_oversize > 0 {
        lines.push(format!(
            "Files skipped (over {}): {}",
            format_bytes(options.max_file_size),
            report.skipped_oversize
        ));
    }
    if report.truncated {
        lines.push("Note: scan limits reached, digest is incomplete".to_string());
    }
    lines.push(String::new());
    lines.push(format!("Estimated tokens: {}", format_tokens(tokens)));
    lines.join("\n")
}

/// Rough token count: one token per four characters.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

/// Format a token count as `950`, `1.2k` or `3.4M`.
pub fn format_tokens(tokens: usize) -> String {
    match tokens {
        t if t >= 1_000_000 => format!("{:.1}M", t as f64 / 1_000_000.0),
        t if t >= 1_000 => format!("{:.1}k", t as f64 / 1_000.0),
        t => t.to_string(),
    }
}

/// Format a byte count with binary units.
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    match bytes {
        b if b >= GIB => format!("{:.1} GiB", b as f64 / GIB as f64),
        b if b >= MIB => format!("{:.1} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KiB", b as f64 / KIB as f64),
        b => format!("{b} B"),
    }
}
