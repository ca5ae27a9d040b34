//! HEAD inspection for checked-out repositories.

use git2::Repository;

use crate::Result;

/// The commit a checkout points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Short commit hash (7 characters)
    pub hash: String,

    /// First line of the commit message
    pub message: String,

    /// Commit author name
    pub author: String,
}

/// Describe the commit HEAD resolves to.
///
/// Fails on repositories without any commit (unborn HEAD).
pub fn head_commit(repo: &Repository) -> Result<CommitInfo> {
    let commit = repo.head()?.peel_to_commit()?;

    let message = commit
        .message()
        .unwrap_or("")
        .lines()
        .next()
        .unwrap_or("")
        .to_string();

    let author = commit.author().name().unwrap_or("Unknown").to_string();

    Ok(CommitInfo {
        hash: format!("{:.7}", commit.id()),
        message,
        author,
    })
}

/// Get the current branch name from a repository.
///
/// Returns the branch name if HEAD points to a branch, or `None` if HEAD is detached.
pub fn current_branch(repo: &Repository) -> Result<Option<String>> {
    let head = repo.head()?;

    if head.is_branch() {
        Ok(head.shorthand().map(str::to_string))
    } else {
        Ok(None)
    }
}
