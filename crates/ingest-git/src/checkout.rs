//! Materializing a [`RepoSource`] on disk

use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;

use crate::{CloneOptions, CommitInfo, RepoSource, Result, clone_into, current_branch, head_commit};

/// A repository available on the local filesystem.
///
/// Clones live in a temporary directory owned by the checkout and are
/// deleted when it is dropped; local directories are never touched.
#[derive(Debug)]
pub struct Checkout {
    root: PathBuf,

    /// Branch that is checked out, when known.
    pub branch: Option<String>,

    /// Commit HEAD points at, when the directory is a non-empty git repository.
    pub commit: Option<CommitInfo>,

    workspace: Option<TempDir>,
}

impl Checkout {
    /// Directory holding the working tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the working tree is a temporary clone.
    pub fn is_temporary(&self) -> bool {
        self.workspace.is_some()
    }
}

/// Make `source` available on disk.
///
/// An explicit `branch` wins over a branch named in the source URL. A local
/// directory is read in place unless a branch is requested, in which case it
/// is cloned so the caller's working tree is left alone.
pub fn prepare_checkout(
    source: &RepoSource,
    branch: Option<&str>,
    options: &CloneOptions,
) -> Result<Checkout> {
    match source {
        RepoSource::Local { path, .. } => match branch {
            None => Ok(inspect_in_place(path)),
            Some(branch) => clone_to_workspace(
                &path.to_string_lossy(),
                Some(branch),
                source.display_name(),
                &CloneOptions::local(),
            ),
        },
        RepoSource::Remote { url, branch: hint, .. } => {
            let branch = branch.or(hint.as_deref());
            clone_to_workspace(url, branch, source.display_name(), options)
        }
    }
}

fn inspect_in_place(path: &Path) -> Checkout {
    let (branch, commit) = match Repository::open(path) {
        Ok(repo) => (
            current_branch(&repo).ok().flatten(),
            head_commit(&repo).ok(),
        ),
        Err(_) => (None, None),
    };

    Checkout {
        root: path.to_path_buf(),
        branch,
        commit,
        workspace: None,
    }
}

fn clone_to_workspace(
    url: &str,
    branch: Option<&str>,
    name: &str,
    options: &CloneOptions,
) -> Result<Checkout> {
    let workspace = TempDir::new()?;
    let dir_name = name.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or("repo");
    let dest = workspace.path().join(dir_name);

    let repo = clone_into(url, branch, &dest, options)?;

    let resolved_branch = match branch {
        Some(b) => Some(b.to_string()),
        None => current_branch(&repo).ok().flatten(),
    };
    let commit = head_commit(&repo).ok();

    tracing::debug!(
        dest = %dest.display(),
        branch = ?resolved_branch,
        commit = ?commit.as_ref().map(|c| &c.hash),
        "Checkout ready"
    );

    Ok(Checkout {
        root: dest,
        branch: resolved_branch,
        commit,
        workspace: Some(workspace),
    })
}
