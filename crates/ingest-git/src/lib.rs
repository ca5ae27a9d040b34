//! Git access for gitingest-mcp
//!
//! Turns a user-supplied repository location into a directory on disk:
//! local directories are read in place, everything else is cloned into a
//! temporary workspace that is removed when the [`Checkout`] is dropped.

pub mod checkout;
pub mod clone;
pub mod commits;
pub mod error;
pub mod source;

pub use checkout::{Checkout, prepare_checkout};
pub use clone::{CloneOptions, clone_into};
pub use commits::{CommitInfo, current_branch, head_commit};
pub use error::{Error, Result};
pub use source::RepoSource;
