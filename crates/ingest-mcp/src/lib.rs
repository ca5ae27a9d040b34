//! MCP Server for repository ingestion
//!
//! This crate exposes a single `ingest_repo` tool via the Model Context
//! Protocol, letting agentic IDEs (like Claude Desktop, Windsurf, Cursor)
//! pull a whole repository into their context as one text digest.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ ingest-mcp (tool endpoint) ]
//!        | IngestRequest
//!        v
//! [ ingest-core (IngestionService) ]
//!        | BackendQuery
//!        v
//! [ GitIngestBackend ] --> ingest-git (clone) --> ingest-digest (scan, render)
//! ```
//!
//! The endpoint never fails: ingestion errors come back as text starting
//! with `Error: `.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use handlers::{handle_tool_call, ingest_repo};
pub use server::{IngestMcpServer, SERVER_NAME};
pub use tools::{INGEST_REPO, ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
