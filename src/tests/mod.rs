//! Crate-internal test suites shared across modules.

pub mod common;
mod property;
