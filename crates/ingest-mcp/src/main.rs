//! gitingest MCP Server
//!
//! A Model Context Protocol server that turns Git repositories into text
//! digests for agentic IDEs like Claude Desktop, Windsurf, and Cursor.
//!
//! # Usage
//!
//! ```bash
//! gitingest-mcp [--config <path>] [--default-max-size <bytes>] [--token-env <NAME>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `ingest_mcp=info`)
//! - `GITHUB_TOKEN` (or the name given to `--token-env`): access token for
//!   private HTTPS remotes
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use ingest_core::AppConfig;
use ingest_mcp::IngestMcpServer;

/// MCP server exposing repository ingestion
#[derive(Parser)]
#[command(name = "gitingest-mcp")]
#[command(about = "MCP server that ingests Git repositories into text digests")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Per-file size ceiling in bytes when a call omits max_size
    #[arg(long, value_name = "BYTES")]
    default_max_size: Option<u64>,

    /// Environment variable holding an access token for private remotes
    #[arg(long, value_name = "NAME")]
    token_env: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<AppConfig, ingest_core::Error> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(size) = self.default_max_size {
            config.service.default_max_size = size;
        }
        if let Some(name) = self.token_env {
            config.git.token_env = name;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ingest_mcp=info".parse()?)
                .add_directive("gitingest_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.into_config()?;

    tracing::info!(
        default_max_size = config.service.default_max_size,
        clone_depth = ?config.git.clone_depth,
        "Starting gitingest-mcp server"
    );

    let mut server = IngestMcpServer::new(config.build_service());
    server.run().await?;

    Ok(())
}
