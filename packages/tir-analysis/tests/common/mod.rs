//! Common test utilities for tir-analysis
//!
//! Shared fixtures and builders for integration tests.

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
