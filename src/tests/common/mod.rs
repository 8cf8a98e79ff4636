//! Common Test Utilities
//!
//! Shared pool fixtures used across test modules.

pub mod fixtures;

pub use fixtures::*;
