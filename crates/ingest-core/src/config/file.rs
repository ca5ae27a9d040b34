//! TOML configuration file

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ingest_digest::ScanLimits;
use serde::Deserialize;

use super::{GitBackendConfig, ServiceConfig};
use crate::{Error, GitIngestBackend, IngestionService, Result};

/// Complete server configuration, as read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub git: GitBackendConfig,
    pub scan: ScanLimits,
}

impl AppConfig {
    /// Load configuration from `path`. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| match e {
            Error::ConfigParse { message, .. } => Error::ConfigParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: Default::default(),
            message: e.message().to_string(),
        })
    }

    /// Build a service backed by [`GitIngestBackend`].
    pub fn build_service(&self) -> IngestionService {
        let backend = GitIngestBackend::new(self.git.clone_options(), self.scan);
        IngestionService::new(Arc::new(backend), self.service)
    }
}
