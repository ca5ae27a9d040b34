//! End-to-end ingestion through [`GitIngestBackend`] on local repositories.

use std::sync::Arc;

use ingest_core::{GitIngestBackend, IngestRequest, IngestionService, ServiceConfig};
use ingest_test_utils::repo::TestRepo;
use rstest::{fixture, rstest};

fn service() -> IngestionService {
    IngestionService::new(Arc::new(GitIngestBackend::default()), ServiceConfig::default())
}

#[fixture]
fn sample() -> TestRepo {
    let repo = TestRepo::new();
    repo.commit(
        &[
            ("README.md", "# Sample\n"),
            ("src/main.py", "print('hello')\n"),
            ("src/util.py", "def add(a, b):\n    return a + b\n"),
            ("tests/test_main.py", "def test_it():\n    pass\n"),
            ("docs/guide.txt", "Read me second.\n"),
        ],
        "Initial",
    );
    repo
}

#[rstest]
fn local_directory_digest_has_all_sections(sample: TestRepo) {
    let digest = service()
        .ingest_repository(&IngestRequest::new(sample.location()))
        .unwrap();

    assert!(digest.starts_with("Repository: project\n"), "{digest}");
    assert!(digest.contains("Files analyzed: 5"), "{digest}");
    assert!(digest.contains("Estimated tokens: "), "{digest}");
    assert!(digest.contains("Directory structure:\n└── project/\n    ├── README.md"), "{digest}");
    assert!(digest.contains("FILE: src/main.py\n"), "{digest}");
    assert!(digest.contains("print('hello')"), "{digest}");
    assert!(!digest.contains("FILE: .git"), "{digest}");
}

#[rstest]
fn include_patterns_restrict_files(sample: TestRepo) {
    let digest = service()
        .ingest_repository(&IngestRequest::new(sample.location()).with_include(["*.py"]))
        .unwrap();

    assert!(digest.contains("Files analyzed: 3"), "{digest}");
    assert!(digest.contains("FILE: src/util.py"), "{digest}");
    assert!(!digest.contains("FILE: README.md"), "{digest}");
    assert!(!digest.contains("FILE: docs/guide.txt"), "{digest}");
}

#[rstest]
fn exclude_patterns_prune_directories(sample: TestRepo) {
    let digest = service()
        .ingest_repository(
            &IngestRequest::new(sample.location())
                .with_include(["*.py"])
                .with_exclude(["tests/*", "docs"]),
        )
        .unwrap();

    assert!(digest.contains("Files analyzed: 2"), "{digest}");
    assert!(!digest.contains("test_main.py"), "{digest}");
    assert!(!digest.contains("docs"), "{digest}");
}

#[rstest]
fn oversize_files_are_skipped_and_counted(sample: TestRepo) {
    sample.write_untracked("data/big.txt", &vec![b'x'; 4096]);

    let digest = service()
        .ingest_repository(&IngestRequest::new(sample.location()).with_max_size(1024))
        .unwrap();

    assert!(digest.contains("Files skipped (over 1.0 KiB): 1"), "{digest}");
    assert!(!digest.contains("FILE: data/big.txt"), "{digest}");
}

#[rstest]
fn zero_max_size_skips_every_non_empty_file(sample: TestRepo) {
    let digest = service()
        .ingest_repository(&IngestRequest::new(sample.location()).with_max_size(0))
        .unwrap();

    assert!(digest.contains("Files analyzed: 0"), "{digest}");
    assert!(digest.contains("Files skipped (over 0 B): 5"), "{digest}");
}

#[rstest]
fn service_default_applies_when_max_size_absent(sample: TestRepo) {
    let service = IngestionService::new(Arc::new(GitIngestBackend::default()), ServiceConfig::new(10));

    let digest = service
        .ingest_repository(&IngestRequest::new(sample.location()))
        .unwrap();

    // Only the 9-byte README fits under the 10-byte default
    assert!(digest.contains("Files analyzed: 1"), "{digest}");
    assert!(digest.contains("Files skipped (over 10 B): 4"), "{digest}");
    assert!(digest.contains("FILE: README.md\n"), "{digest}");
}

#[rstest]
#[case("*.svg", "FILE: icons/logo.svg\n")]
#[case("build/*", "FILE: build/gen.py\n")]
fn include_overrides_default_excludes(sample: TestRepo, #[case] include: &str, #[case] expected: &str) {
    sample.commit(
        &[("icons/logo.svg", "<svg/>\n"), ("build/gen.py", "print('gen')\n")],
        "Add generated files",
    );

    let digest = service()
        .ingest_repository(&IngestRequest::new(sample.location()).with_include([include]))
        .unwrap();

    assert!(digest.contains("Files analyzed: 1"), "{digest}");
    assert!(digest.contains(expected), "{digest}");
}

#[rstest]
fn binary_files_are_listed_with_placeholder(sample: TestRepo) {
    sample.write_untracked("logo.bin", &[0x89, b'P', 0x00, 0x01, 0x02]);

    let digest = service()
        .ingest_repository(&IngestRequest::new(sample.location()))
        .unwrap();

    assert!(digest.contains("FILE: logo.bin\n"), "{digest}");
    assert!(digest.contains("[Binary file]"), "{digest}");
}

#[test]
fn branch_is_cloned_from_local_repository() {
    let repo = TestRepo::new();
    repo.commit(&[("README.md", "# Main\n")], "Initial");
    repo.branch("feature").switch("feature");
    repo.commit(&[("feature.py", "FEATURE = True\n")], "Add feature");

    let digest = service()
        .ingest_repository(&IngestRequest::new(repo.location()).with_branch("feature"))
        .unwrap();

    assert!(digest.contains("Branch: feature"), "{digest}");
    assert!(digest.contains("Commit: "), "{digest}");
    assert!(digest.contains("FILE: feature.py"), "{digest}");
    assert!(digest.contains("FILE: README.md"), "{digest}");
}

#[rstest]
fn missing_branch_fails_with_branch_name(sample: TestRepo) {
    let err = service()
        .ingest_repository(&IngestRequest::new(sample.location()).with_branch("no-such-branch"))
        .unwrap_err();

    assert!(err.to_string().contains("no-such-branch"), "{err}");
}

#[rstest]
fn invalid_pattern_is_reported(sample: TestRepo) {
    let err = service()
        .ingest_repository(&IngestRequest::new(sample.location()).with_include(["[unclosed"]))
        .unwrap_err();

    assert!(err.to_string().starts_with("Invalid pattern '[unclosed'"), "{err}");
}

#[test]
fn missing_local_path_is_reported() {
    let temp = tempfile::TempDir::new().unwrap();
    let missing = temp.path().join("absent");

    let err = service()
        .ingest_repository(&IngestRequest::new(missing.to_string_lossy()))
        .unwrap_err();

    assert!(err.to_string().starts_with("Local path not found"), "{err}");
}

#[test]
fn empty_url_is_rejected() {
    let err = service().ingest_repository(&IngestRequest::new("")).unwrap_err();
    assert!(err.to_string().contains("repository location is empty"), "{err}");
}
