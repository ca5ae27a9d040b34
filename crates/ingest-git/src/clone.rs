//! Cloning with git2

use std::path::Path;

use git2::build::RepoBuilder;
use git2::{Cred, CredentialType, ErrorCode, FetchOptions, RemoteCallbacks, Repository};

use crate::{Error, Result};

/// Options applied to every clone.
#[derive(Clone, Default)]
pub struct CloneOptions {
    /// Fetch only this many commits of history. `None` clones everything.
    pub depth: Option<i32>,

    /// Access token for private HTTPS remotes.
    pub token: Option<String>,
}

impl std::fmt::Debug for CloneOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloneOptions")
            .field("depth", &self.depth)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CloneOptions {
    /// Options for cloning from a path on this machine.
    ///
    /// libgit2's local transport does not support shallow fetches, and
    /// local paths never need credentials.
    pub fn local() -> Self {
        Self::default()
    }
}

/// Clone `url` into `dest`, checking out `branch` or the remote's default
/// branch.
pub fn clone_into(
    url: &str,
    branch: Option<&str>,
    dest: &Path,
    options: &CloneOptions,
) -> Result<Repository> {
    tracing::info!(url = %url, branch = ?branch, depth = ?options.depth, "Cloning repository");

    let mut callbacks = RemoteCallbacks::new();
    if let Some(token) = options.token.clone() {
        callbacks.credentials(move |_url, _username, allowed| {
            if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
                Cred::userpass_plaintext("x-access-token", &token)
            } else {
                Cred::default()
            }
        });
    }

    let mut fetch = FetchOptions::new();
    fetch.remote_callbacks(callbacks);
    if let Some(depth) = options.depth {
        fetch.depth(depth);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch);
    if let Some(branch) = branch {
        builder.branch(branch);
    }

    builder.clone(url, dest).map_err(|e| {
        if let Some(name) = branch
            && e.code() == ErrorCode::NotFound
        {
            return Error::BranchNotFound {
                name: name.to_string(),
            };
        }
        Error::CloneFailed {
            url: url.to_string(),
            message: e.message().to_string(),
        }
    })
}
