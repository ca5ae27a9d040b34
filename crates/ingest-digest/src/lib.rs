//! Digest generation for gitingest-mcp
//!
//! Walks a checked-out repository, applies include/exclude glob filters and a
//! per-file size ceiling, and renders the three digest parts: a summary, a
//! directory tree and the concatenated file contents.
//!
//! ```ignore
//! use ingest_digest::{DigestHeader, ScanOptions, ingest_directory};
//!
//! let options = ScanOptions::new(Some("*.rs"), None, 10 * 1024 * 1024)?;
//! let digest = ingest_directory(path, &DigestHeader::new("user/repo"), &options)?;
//! println!("{}\n\n{}\n\n{}", digest.summary, digest.tree, digest.content);
//! ```

pub mod constants;
pub mod digest;
pub mod error;
pub mod filter;
pub mod path;
pub mod scan;
pub mod tree;

pub use digest::{Digest, DigestHeader, ingest_directory};
pub use error::{Error, Result};
pub use filter::PatternSet;
pub use path::NormalizedPath;
pub use scan::{FileBody, ScanLimits, ScanOptions, ScanReport, ScannedFile, scan};
pub use tree::DirTree;
