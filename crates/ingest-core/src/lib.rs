//! Ingestion facade for gitingest-mcp
//!
//! This crate sits between the MCP tool endpoint and the ingestion backend:
//!
//! - **Request model**: [`IngestRequest`] as received from a tool call,
//!   [`BackendQuery`] as handed to a backend, [`IngestResult`] as returned
//! - **Facade**: [`IngestionService`] joins pattern lists into the
//!   comma-separated form backends accept, applies the configured default
//!   size ceiling and concatenates the backend's three digest parts
//! - **Backends**: the [`IngestBackend`] trait and [`GitIngestBackend`],
//!   which clones with `ingest-git` and renders with `ingest-digest`
//! - **Configuration**: [`AppConfig`] loaded from TOML
//!
//! # Architecture
//!
//! ```text
//!                 ingest-mcp (tool endpoint)
//!                        |
//!                   ingest-core
//!                        |
//!              +---------+---------+
//!              |                   |
//!         ingest-git         ingest-digest
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ingest_core::{GitIngestBackend, IngestRequest, IngestionService, ServiceConfig};
//!
//! let backend = Arc::new(GitIngestBackend::default());
//! let service = IngestionService::new(backend, ServiceConfig::default());
//! let digest = service.ingest_repository(&IngestRequest::new("https://github.com/user/repo"))?;
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod request;
pub mod service;

pub use backend::{GitIngestBackend, IngestBackend};
pub use config::{AppConfig, DEFAULT_MAX_SIZE, GitBackendConfig, ServiceConfig};
pub use error::{BackendError, Error, Result};
pub use request::{BackendQuery, IngestRequest, IngestResult};
pub use service::{IngestionService, format_digest, join_patterns};
