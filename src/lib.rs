//! Calcdriver: UI-automation test suite for a desktop calculator
//!
//! This library drives a running calculator application through a
//! WebDriver-style automation protocol, using page objects addressed by
//! accessibility identifiers. The `sim` module provides an in-memory
//! application double the test suites run against.

pub mod error;
pub mod config;

pub mod wire;
pub mod session;
pub mod pages;
pub mod sim;

// Re-exports
pub use error::{Error, Result};

/// Calcdriver library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
