//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling with the
//! ingestion service.

use std::io::{BufRead, Write};

use ingest_core::IngestionService;
use serde_json::{Value, json};

use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeParams, InitializeResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
    ServerCapabilities, ServerInfo, ToolCallParams, ToolsCapability, codes,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "gitingest-mcp";

/// MCP Server for repository ingestion
///
/// Reads one JSON-RPC message per line and writes one response per line.
/// Notifications produce no output.
///
/// # Example
///
/// ```ignore
/// use ingest_core::AppConfig;
/// use ingest_mcp::IngestMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut server = IngestMcpServer::new(AppConfig::default().build_service());
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct IngestMcpServer {
    /// Facade every tool call goes through
    service: IngestionService,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools
    tools: Vec<ToolDefinition>,
}

impl IngestMcpServer {
    pub fn new(service: IngestionService) -> Self {
        Self {
            service,
            initialized: false,
            tools: Vec::new(),
        }
    }

    /// Initialize the server
    ///
    /// Loads the tool definitions advertised by `tools/list`.
    pub async fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            default_max_size = self.service.config().default_max_size,
            "Initializing MCP server"
        );

        self.tools = get_tool_definitions();
        self.initialized = true;
        Ok(())
    }

    /// Run the MCP server over stdin/stdout.
    pub async fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(stdin.lock(), stdout.lock()).await
    }

    /// Process messages from `input` until end of stream.
    pub async fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        if !self.initialized {
            self.initialize().await?;
        }

        tracing::info!("MCP server ready, listening on stdio");

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(output, "{}", response)?;
                    output.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    let error_response = JsonRpcResponse::error(
                        None,
                        codes::INTERNAL_ERROR,
                        format!("Internal error: {}", e),
                    );
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(output, "{}", json_str)?;
                    output.flush()?;
                }
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the JSON-RPC response as a string, or an empty string for
    /// notifications. Protocol-level problems (unparseable input, unknown
    /// methods, bad params) are answered with JSON-RPC error responses.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable message");
                return encode(JsonRpcResponse::error(
                    None,
                    codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        let id = value.get("id").filter(|id| !id.is_null()).cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return encode(JsonRpcResponse::error(
                    id,
                    codes::INVALID_REQUEST,
                    format!("Invalid Request: {}", e),
                ));
            }
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id, request.params)?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id)?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ if request.is_notification() => {
                tracing::debug!(method = %request.method, "Ignoring notification");
                return Ok(String::new());
            }
            _ => JsonRpcResponse::error(
                request.id,
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        encode(response)
    }

    /// Handle the initialize request
    ///
    /// Returns server capabilities and info.
    fn handle_initialize(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                version = ?client.version,
                protocol = ?params.protocol_version,
                "Client connected"
            );
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        Ok(JsonRpcResponse::success(
            id,
            json!({ "tools": serde_json::to_value(&self.tools)? }),
        ))
    }

    /// Handle tools/call request
    ///
    /// Invalid calls (unknown tool, bad arguments) become tool results with
    /// `isError: true`; ingestion failures are ordinary text results.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    codes::INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                ));
            }
        };

        tracing::info!(tool = %tool_params.name, "Tool call");

        let tool_result =
            match handle_tool_call(&self.service, &tool_params.name, tool_params.arguments).await {
                Ok(text) => ToolResult::text(text),
                Err(e) => {
                    tracing::warn!(tool = %tool_params.name, error = %e, "Rejected tool call");
                    ToolResult::error(e.to_string())
                }
            };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
    }

    pub fn service(&self) -> &IngestionService {
        &self.service
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}

fn encode(response: JsonRpcResponse) -> Result<String> {
    serde_json::to_string(&response).map_err(Error::from)
}
