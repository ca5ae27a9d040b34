//! Fixed values shared by the scanner and the renderers.

/// Line of `=` framing each file header in the content section.
pub const FILE_SEPARATOR: &str = "================================================";

/// Placeholder rendered instead of the body of a binary file.
pub const BINARY_PLACEHOLDER: &str = "[Binary file]";

/// Number of leading bytes inspected when sniffing for binary content.
pub const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Default maximum number of files placed in one digest.
pub const DEFAULT_MAX_FILES: usize = 10_000;

/// Default maximum directory depth walked below the root.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Default ceiling for the sum of all included file sizes (500 MiB).
pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 500 * 1024 * 1024;

/// Patterns excluded from every digest, regardless of user filters.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    ".gitmodules",
    // Dependency and environment directories
    "node_modules",
    "bower_components",
    "vendor/bundle",
    ".venv",
    "venv",
    "env",
    ".tox",
    "__pycache__",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    // Build output
    "target",
    "dist",
    "build",
    "*.egg-info",
    ".next",
    ".nuxt",
    // Editors and OS
    ".idea",
    ".vscode",
    ".DS_Store",
    "Thumbs.db",
    "*.swp",
    "*.swo",
    // Lock files
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    "Pipfile.lock",
    "Gemfile.lock",
    "composer.lock",
    "Cargo.lock",
    "go.sum",
    // Compiled and packaged artifacts
    "*.pyc",
    "*.pyo",
    "*.class",
    "*.o",
    "*.a",
    "*.so",
    "*.dll",
    "*.dylib",
    "*.exe",
    "*.jar",
    "*.zip",
    "*.tar",
    "*.gz",
    "*.min.js",
    "*.min.css",
    "*.map",
    // Media
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.ico",
    "*.svg",
    "*.webp",
    "*.mp3",
    "*.mp4",
    "*.pdf",
];
