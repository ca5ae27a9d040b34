//! End-to-end tests for the ingestion vertical slice
//!
//! These tests exercise the complete flow: config -> MCP server -> tool
//! endpoint -> facade -> git backend -> digest text, against real
//! repositories on disk.

use ingest_core::AppConfig;
use ingest_mcp::IngestMcpServer;
use ingest_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const SEPARATOR: &str = "================================================";

#[fixture]
fn demo() -> TestRepo {
    let repo = TestRepo::new();
    repo.commit(
        &[
            ("README.md", "# Demo\n"),
            ("src/lib.rs", "pub fn one() -> u32 {\n    1\n}\n"),
        ],
        "Initial",
    );
    repo
}

async fn server_from(config: &str) -> IngestMcpServer {
    let config = AppConfig::parse(config).unwrap();
    let mut server = IngestMcpServer::new(config.build_service());
    server.initialize().await.unwrap();
    server
}

/// Call `ingest_repo` and return the text of the tool result.
async fn ingest(server: &IngestMcpServer, arguments: Value) -> String {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": "ingest_repo", "arguments": arguments}
    });
    let response: Value =
        serde_json::from_str(&server.handle_message(&request.to_string()).await.unwrap()).unwrap();
    assert!(response.get("error").is_none(), "unexpected protocol error: {response}");
    response["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string()
}

#[rstest]
#[tokio::test]
async fn digest_layout_is_summary_tree_content(demo: TestRepo) {
    let server = server_from("").await;

    let digest = ingest(&server, json!({"url": demo.location()})).await;

    let tree_start = digest.find("Directory structure:").unwrap();
    let (summary, rest) = digest.split_at(tree_start);

    let summary_lines: Vec<&str> = summary.trim_end().lines().collect();
    assert_eq!(summary_lines[0], "Repository: project");
    assert!(summary_lines.iter().any(|l| l.starts_with("Branch: ")), "{summary}");
    let commit = summary_lines
        .iter()
        .find_map(|l| l.strip_prefix("Commit: "))
        .unwrap();
    assert_eq!(commit.len(), 7);
    assert!(commit.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(summary_lines.contains(&"Files analyzed: 2"));
    assert!(summary_lines.last().unwrap().starts_with("Estimated tokens: "));
    assert!(summary.ends_with("\n\n"));

    let expected = format!(
        "Directory structure:\n\
         └── project/\n    \
         ├── README.md\n    \
         └── src/\n        \
         └── lib.rs\n\
         \n\
         {SEPARATOR}\nFILE: README.md\n{SEPARATOR}\n# Demo\n\n\n\
         {SEPARATOR}\nFILE: src/lib.rs\n{SEPARATOR}\npub fn one() -> u32 {{\n    1\n}}\n\n\n"
    );
    assert_eq!(rest, expected);
}

#[rstest]
#[tokio::test]
async fn file_url_reads_local_repository(demo: TestRepo) {
    let server = server_from("").await;

    let digest = ingest(&server, json!({"url": format!("file://{}", demo.location())})).await;

    assert!(digest.starts_with("Repository: project\n"), "{digest}");
    assert!(digest.contains("FILE: src/lib.rs"), "{digest}");
}

#[rstest]
#[tokio::test]
async fn branch_argument_clones_that_branch(demo: TestRepo) {
    demo.branch("docs").switch("docs");
    demo.commit(&[("docs/guide.md", "# Guide\n")], "Add guide");

    let server = server_from("").await;
    let digest = ingest(
        &server,
        json!({"url": demo.location(), "branch": "docs", "include_patterns": ["*.md"]}),
    )
    .await;

    assert!(digest.contains("Branch: docs"), "{digest}");
    assert!(digest.contains("Files analyzed: 2"), "{digest}");
    assert!(digest.contains("FILE: docs/guide.md"), "{digest}");
    assert!(!digest.contains("FILE: src/lib.rs"), "{digest}");
}

#[rstest]
#[tokio::test]
async fn config_scan_limits_truncate_digest(demo: TestRepo) {
    let server = server_from("[scan]\nmax_files = 1\n").await;

    let digest = ingest(&server, json!({"url": demo.location()})).await;

    assert!(digest.contains("Files analyzed: 1"), "{digest}");
    assert!(digest.contains("Note: scan limits reached"), "{digest}");
}

#[rstest]
#[tokio::test]
async fn config_default_size_applies_per_server(demo: TestRepo) {
    let small = server_from("[service]\ndefault_max_size = 8\n").await;
    let large = server_from("").await;

    let from_small = ingest(&small, json!({"url": demo.location()})).await;
    let from_large = ingest(&large, json!({"url": demo.location()})).await;
    let explicit = ingest(&small, json!({"url": demo.location(), "max_size": 1024})).await;

    assert!(from_small.contains("Files skipped (over 8 B): 1"), "{from_small}");
    assert!(from_small.contains("FILE: README.md"), "{from_small}");
    assert!(from_large.contains("Files analyzed: 2"), "{from_large}");
    assert!(explicit.contains("Files analyzed: 2"), "{explicit}");
}

#[rstest]
#[tokio::test]
async fn default_excludes_hide_vendored_directories(demo: TestRepo) {
    demo.write_untracked("node_modules/pkg/index.js", b"module.exports = 1;\n");
    demo.write_untracked("Cargo.lock", b"# lock\n");

    let server = server_from("").await;
    let digest = ingest(&server, json!({"url": demo.location()})).await;

    assert!(!digest.contains("node_modules"), "{digest}");
    assert!(!digest.contains("Cargo.lock"), "{digest}");
    assert!(!digest.contains(".git/"), "{digest}");
}

#[tokio::test]
async fn unreachable_remote_is_error_text() {
    let server = server_from("").await;

    let digest = ingest(&server, json!({"url": "https://127.0.0.1:1/user/repo"})).await;

    assert!(digest.starts_with("Error: Failed to clone"), "{digest}");
}

#[tokio::test]
async fn malformed_pattern_is_error_text() {
    let server = server_from("").await;

    let digest = ingest(
        &server,
        json!({"url": "https://127.0.0.1:1/user/repo", "exclude_patterns": ["[oops"]}),
    )
    .await;

    // Patterns are compiled before any network access
    assert!(digest.starts_with("Error: Invalid pattern '[oops'"), "{digest}");
}
