//! [`TestRepo`] builder for ingestion test scenarios.

use std::fs;
use std::path::Path;

use git2::Repository;
use tempfile::TempDir;

use crate::git::{commit_files, create_branch};

/// A temporary git repository with helpers for building a source tree.
///
/// # Example
///
/// ```rust,no_run
/// use ingest_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.commit(&[("src/main.py", "print('hi')"), ("README.md", "# Demo")], "Initial");
/// repo.branch("dev");
/// let location = repo.location();
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
    repo: Repository,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty repository named `project` inside a temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestRepo::new: failed to create temp dir");
        let repo = Repository::init(temp_dir.path().join("project"))
            .expect("TestRepo::new: failed to init git repository");
        Self { temp_dir, repo }
    }

    /// Working tree root.
    pub fn root(&self) -> &Path {
        self.repo
            .workdir()
            .expect("TestRepo::root: repository has a working tree")
    }

    /// Root as a string, the form the ingestion tool accepts as `url`.
    pub fn location(&self) -> String {
        self.root().to_string_lossy().trim_end_matches('/').to_string()
    }

    pub fn git(&self) -> &Repository {
        &self.repo
    }

    /// Write, stage and commit `files` on the current branch.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) -> &Self {
        commit_files(&self.repo, files, message);
        self
    }

    /// Create a branch at HEAD without switching to it.
    pub fn branch(&self, name: &str) -> &Self {
        create_branch(&self.repo, name);
        self
    }

    /// Switch HEAD to an existing branch and force-checkout its tree.
    pub fn switch(&self, name: &str) -> &Self {
        self.repo
            .set_head(&format!("refs/heads/{name}"))
            .expect("TestRepo::switch: failed to set HEAD");
        self.repo
            .checkout_head(Some(git2::build::CheckoutBuilder::default().force()))
            .expect("TestRepo::switch: failed to checkout HEAD");
        self
    }

    /// Write a file to the working tree without committing it.
    pub fn write_untracked(&self, path: &str, content: &[u8]) -> &Self {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        self
    }

    /// Path to the temporary directory that contains the repository.
    pub fn scratch(&self) -> &Path {
        self.temp_dir.path()
    }
}
