//! MCP tool definitions
//!
//! The server exposes a single tool:
//!
//! - `ingest_repo` - Turn a repository into a text digest (summary, directory
//!   tree and file contents) for an agent to read.

use serde::{Deserialize, Serialize};

/// Name under which the ingestion tool is registered.
pub const INGEST_REPO: &str = "ingest_repo";

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }

    /// Text of the first content item.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|c| match c {
            ToolContent::Text { text } => text.as_str(),
        })
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![ToolDefinition {
        name: INGEST_REPO.to_string(),
        description: "Ingest a Git repository and return a structured text digest optimized \
                      for AI agents: a summary, the directory structure and the contents of \
                      every included file. Failures are returned as text starting with \
                      'Error: '."
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Repository location (e.g., https://github.com/user/repo, user/repo or a local path)"
                },
                "branch": {
                    "type": "string",
                    "description": "The specific branch to analyze"
                },
                "include_patterns": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Patterns to include (e.g., [\"*.py\", \"*.md\"])"
                },
                "exclude_patterns": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Patterns to exclude (e.g., [\"node_modules/*\", \"*.log\"])"
                },
                "max_size": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Maximum file size in bytes to process (default 10 MiB)"
                }
            },
            "required": ["url"]
        }),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_ingest_tool() {
        let tools = get_tool_definitions();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, INGEST_REPO);
    }

    #[test]
    fn test_schema_requires_only_url() {
        let tools = get_tool_definitions();
        let schema = &tools[0].input_schema;
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["url"]));
        for field in ["url", "branch", "include_patterns", "exclude_patterns", "max_size"] {
            assert!(
                schema["properties"].get(field).is_some(),
                "schema should describe {}",
                field
            );
        }
        assert_eq!(schema["properties"]["include_patterns"]["type"], "array");
        assert_eq!(schema["properties"]["max_size"]["type"], "integer");
    }

    #[test]
    fn test_schema_accepts_zero_max_size() {
        let tools = get_tool_definitions();
        assert_eq!(tools[0].input_schema["properties"]["max_size"]["minimum"], 0);
    }

    #[test]
    fn test_tool_definition_serializes_camel_case() {
        let value = serde_json::to_value(&get_tool_definitions()[0]).unwrap();
        assert!(value.get("inputSchema").is_some());
        assert!(value.get("input_schema").is_none());
    }

    #[test]
    fn test_tool_result_serialize() {
        let json = serde_json::to_string(&ToolResult::text("Hello, world!")).unwrap();
        assert!(json.contains("Hello, world!"));
        assert!(json.contains(r#""type":"text""#));
        // isError is skipped when None
        assert!(!json.contains("isError"));

        let error_json = serde_json::to_string(&ToolResult::error("Something went wrong")).unwrap();
        assert!(error_json.contains(r#""isError":true"#));
    }

    #[test]
    fn test_tool_result_deserialize() {
        let json = r#"{
            "content": [{"type": "text", "text": "Result text"}],
            "isError": false
        }"#;
        let result: ToolResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.first_text(), Some("Result text"));
    }
}
