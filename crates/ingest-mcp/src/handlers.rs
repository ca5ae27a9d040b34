//! MCP Tool Handlers
//!
//! Tool calls are dispatched by name. `ingest_repo` is the tool endpoint: it
//! hands the request to the [`IngestionService`] and turns every failure into
//! `"Error: ..."` text, so a caller always receives a string.

use ingest_core::{IngestRequest, IngestionService};
use serde_json::Value;

use crate::tools::INGEST_REPO;
use crate::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
///
/// Returns `Err` only when the call itself is invalid (unknown tool or
/// arguments that do not match the schema). Ingestion failures are part of
/// the `Ok` text.
pub async fn handle_tool_call(
    service: &IngestionService,
    tool_name: &str,
    arguments: Value,
) -> Result<String> {
    match tool_name {
        INGEST_REPO => {
            let request: IngestRequest = serde_json::from_value(arguments)
                .map_err(|e| Error::InvalidArguments(e.to_string()))?;
            Ok(ingest_repo(service, request).await)
        }
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// The `ingest_repo` tool endpoint. Never fails.
///
/// The facade call blocks on network and disk work, so it runs on the
/// blocking pool. A panic inside the backend surfaces as a join error and is
/// rendered like any other failure.
pub async fn ingest_repo(service: &IngestionService, request: IngestRequest) -> String {
    let service = service.clone();
    let outcome =
        tokio::task::spawn_blocking(move || service.ingest_repository(&request)).await;

    match outcome {
        Ok(Ok(digest)) => digest,
        Ok(Err(e)) => format!("Error: {e}"),
        Err(e) => {
            tracing::error!(error = %e, "Ingestion task did not complete");
            format!("Error: {e}")
        }
    }
}
