//! Repository location parsing
//!
//! Accepted forms:
//!
//! | input | result |
//! |-------|--------|
//! | `/path/to/dir`, `./dir`, `file:///path` | [`RepoSource::Local`] |
//! | `https://host/owner/repo[.git]` | [`RepoSource::Remote`] |
//! | `https://host/owner/repo/tree/<branch>[/<subpath>]` | remote with branch and subpath hints |
//! | `https://host/owner/repo/blob/<branch>/...` | remote with a branch hint |
//! | `git@host:owner/repo.git`, `ssh://...`, `git://...` | remote, URL kept verbatim |
//! | `https://host/group/sub/project[/-/tree/<branch>...]` | remote; every segment before `-`, `tree` or `blob` is kept |
//! | `owner/repo` | `https://github.com/owner/repo` |
//!
//! The branch in a `/tree/` URL is a single path segment: in
//! `/tree/feature/x/src` the branch is `feature` and the subpath `x/src`.
//! Branches whose names contain `/` must be passed as the `branch`
//! argument, which overrides the URL hint.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::{Error, Result};

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("slug regex is valid")
});

/// Host used for bare `owner/repo` shorthands.
pub const DEFAULT_HOST: &str = "https://github.com";

/// Hosts whose repository paths are always `owner/repo`.
const FLAT_HOSTS: &[&str] = &["github.com", "www.github.com", "bitbucket.org"];

/// Where a repository comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// A directory on this machine.
    Local { path: PathBuf, name: String },

    /// A repository reachable through a git transport.
    Remote {
        /// Clone URL with any `/tree/...` suffix removed
        url: String,
        /// `owner/repo`
        slug: String,
        /// Branch named in the URL, if any
        branch: Option<String>,
        /// Sub-directory named in the URL, if any
        subpath: Option<String>,
    },
}

impl RepoSource {
    /// Parse a user-supplied repository location.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid(input, "repository location is empty"));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return parse_http(trimmed);
        }

        if trimmed.starts_with("ssh://")
            || trimmed.starts_with("git://")
            || trimmed.starts_with("git@")
        {
            return Ok(Self::Remote {
                url: trimmed.to_string(),
                slug: slug_from_path(trimmed),
                branch: None,
                subpath: None,
            });
        }

        if trimmed.starts_with("file://") {
            let url = Url::parse(trimmed).map_err(|e| invalid(input, &e.to_string()))?;
            let path = url
                .to_file_path()
                .map_err(|_| invalid(input, "not a valid file URL"))?;
            return local(&path);
        }

        let path = Path::new(trimmed);
        if path.is_dir() {
            return local(path);
        }

        if SLUG_RE.is_match(trimmed) {
            return parse_http(&format!("{}/{}", DEFAULT_HOST, trimmed));
        }

        if trimmed.starts_with('/')
            || trimmed.starts_with('.')
            || trimmed.starts_with('~')
            || trimmed.contains('\\')
            || path.exists()
        {
            return Err(Error::LocalPathNotFound {
                path: path.to_path_buf(),
            });
        }

        Err(invalid(
            input,
            "expected a URL, an owner/repo shorthand or a local directory",
        ))
    }

    /// Name shown in the digest summary.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Local { name, .. } => name,
            Self::Remote { slug, .. } => slug,
        }
    }

    /// Branch hint carried by the location itself.
    pub fn branch_hint(&self) -> Option<&str> {
        match self {
            Self::Local { .. } => None,
            Self::Remote { branch, .. } => branch.as_deref(),
        }
    }

    /// Sub-directory hint carried by the location itself.
    pub fn subpath(&self) -> Option<&str> {
        match self {
            Self::Local { .. } => None,
            Self::Remote { subpath, .. } => subpath.as_deref(),
        }
    }
}

fn invalid(input: &str, reason: &str) -> Error {
    Error::InvalidSource {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn local(path: &Path) -> Result<RepoSource> {
    if !path.is_dir() {
        return Err(Error::LocalPathNotFound {
            path: path.to_path_buf(),
        });
    }
    let path = dunce::canonicalize(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(RepoSource::Local { path, name })
}

fn parse_http(input: &str) -> Result<RepoSource> {
    let mut url = Url::parse(input).map_err(|e| invalid(input, &e.to_string()))?;
    if url.host_str().is_none() {
        return Err(invalid(input, "URL has no host"));
    }

    let segments: Vec<String> = url
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).map(str::to_string).collect())
        .unwrap_or_default();

    // The repository path ends at the first `-`, `tree` or `blob` segment,
    // so GitLab subgroups (`group/sub/project`) stay intact. Hosts without
    // nesting always use `owner/repo`.
    let split = if FLAT_HOSTS.contains(&url.host_str().unwrap_or_default()) {
        segments.len().min(2)
    } else {
        segments
            .iter()
            .skip(2)
            .position(|s| matches!(s.as_str(), "-" | "tree" | "blob"))
            .map_or(segments.len(), |i| i + 2)
    };
    let (repo_path, rest) = segments.split_at(split);

    let [owners @ .., repo] = repo_path else {
        return Err(invalid(input, "URL must name an owner and a repository"));
    };
    if owners.is_empty() {
        return Err(invalid(input, "URL must name an owner and a repository"));
    }
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    let slug = format!("{}/{repo}", owners.join("/"));

    let rest = match rest {
        [dash, tail @ ..] if dash == "-" => tail,
        _ => rest,
    };
    let (branch, subpath) = match rest {
        [kind, branch, sub @ ..] if kind == "tree" => {
            let subpath = (!sub.is_empty()).then(|| sub.join("/"));
            (Some(branch.clone()), subpath)
        }
        [kind, branch, ..] if kind == "blob" => (Some(branch.clone()), None),
        _ => (None, None),
    };

    url.set_path(&format!("/{slug}"));
    url.set_query(None);
    url.set_fragment(None);

    Ok(RepoSource::Remote {
        url: url.to_string(),
        slug,
        branch,
        subpath,
    })
}

/// Derive `owner/repo` from the tail of an SSH-style location.
fn slug_from_path(location: &str) -> String {
    let path = location.rsplit(':').next().unwrap_or(location);
    let parts: Vec<&str> = path
        .split('/')
        .filter(|p| !p.is_empty())
        .map(|p| p.strip_suffix(".git").unwrap_or(p))
        .collect();

    match parts.as_slice() {
        [.., owner, repo] => format!("{owner}/{repo}"),
        [repo] => (*repo).to_string(),
        [] => location.to_string(),
    }
}
