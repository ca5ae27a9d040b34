//! Git repository fixtures built with `git2`.
//!
//! Everything here uses an explicit signature, so fixtures work on machines
//! without a global `user.name` / `user.email`.

use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature};

/// Signature used for every fixture commit.
pub fn test_signature() -> Signature<'static> {
    Signature::now("Test User", "test@test.com")
        .unwrap_or_else(|e| panic!("test_signature: failed to build signature: {e}"))
}

/// Write `files` into the working tree of `repo`, stage them and commit on
/// HEAD.
///
/// Parent directories are created as needed. Returns the new commit id.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn commit_files(repo: &Repository, files: &[(&str, &str)], message: &str) -> Oid {
    let workdir = repo
        .workdir()
        .unwrap_or_else(|| panic!("commit_files: repository is bare"))
        .to_path_buf();

    let mut index = repo
        .index()
        .unwrap_or_else(|e| panic!("commit_files: failed to open index: {e}"));

    for (rel, content) in files {
        let path = workdir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("commit_files: failed to create {parent:?}: {e}"));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("commit_files: failed to write {rel}: {e}"));
        index
            .add_path(Path::new(rel))
            .unwrap_or_else(|e| panic!("commit_files: failed to stage {rel}: {e}"));
    }
    index
        .write()
        .unwrap_or_else(|e| panic!("commit_files: failed to write index: {e}"));

    let tree_id = index
        .write_tree()
        .unwrap_or_else(|e| panic!("commit_files: failed to write tree: {e}"));
    let tree = repo
        .find_tree(tree_id)
        .unwrap_or_else(|e| panic!("commit_files: failed to find tree: {e}"));

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let sig = test_signature();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_files: failed to commit: {e}"))
}

/// Create a local branch named `name` at the current HEAD commit.
///
/// # Panics
/// Panics if HEAD is unborn or the branch cannot be created.
pub fn create_branch(repo: &Repository, name: &str) {
    let head = repo
        .head()
        .and_then(|h| h.peel_to_commit())
        .unwrap_or_else(|e| panic!("create_branch: HEAD has no commit: {e}"));
    repo.branch(name, &head, false)
        .unwrap_or_else(|e| panic!("create_branch: failed to create {name}: {e}"));
}

/// Initialises a repository at `path` with one commit containing `README.md`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_commit(path: &Path) -> Repository {
    let repo = Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "repo_with_commit: failed to init repository at {}: {e}",
            path.display()
        )
    });
    commit_files(&repo, &[("README.md", "# Test")], "Initial commit");
    repo
}
