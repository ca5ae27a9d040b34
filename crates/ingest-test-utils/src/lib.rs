//! Shared test utilities for the gitingest-mcp workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`git`] - git repository fixtures built with `git2`
//! - [`repo`] - [`repo::TestRepo`] builder for source trees with history
//! - [`backend`] - [`backend::RecordingBackend`], a scripted ingestion backend

pub mod backend;
pub mod git;
pub mod repo;
