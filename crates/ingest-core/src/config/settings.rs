//! Configuration values for the facade and the git backend

use ingest_git::CloneOptions;
use serde::Deserialize;

/// Default per-file ceiling applied when a call omits `max_size` (10 MiB).
pub const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;

/// Environment variable read for an access token by default.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Settings of an [`crate::IngestionService`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Byte ceiling used when a request does not carry `max_size`
    pub default_max_size: u64,
}

impl ServiceConfig {
    pub fn new(default_max_size: u64) -> Self {
        Self { default_max_size }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// Settings of a [`crate::GitIngestBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GitBackendConfig {
    /// Shallow clone depth for remote sources; `None` fetches full history
    pub clone_depth: Option<i32>,

    /// Name of the environment variable holding an access token
    pub token_env: String,
}

impl Default for GitBackendConfig {
    fn default() -> Self {
        Self {
            clone_depth: Some(1),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl GitBackendConfig {
    /// Build clone options, reading the token from the configured variable.
    pub fn clone_options(&self) -> CloneOptions {
        let token = std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty());

        CloneOptions {
            depth: self.clone_depth.filter(|d| *d > 0),
            token,
        }
    }
}
