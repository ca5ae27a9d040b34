//! Service and backend configuration
//!
//! Every setting has a default, so an empty or absent config file yields a
//! working server. A config file may carry any of three tables:
//!
//! ```toml
//! [service]
//! default_max_size = 10485760   # bytes, used when a call omits max_size
//!
//! [git]
//! clone_depth = 1               # omit for full history
//! token_env = "GITHUB_TOKEN"    # env var holding a token for private remotes
//!
//! [scan]
//! max_files = 10000
//! max_depth = 20
//! max_total_size = 524288000
//! ```

mod file;
mod settings;

pub use file::AppConfig;
pub use settings::{DEFAULT_MAX_SIZE, DEFAULT_TOKEN_ENV, GitBackendConfig, ServiceConfig};
