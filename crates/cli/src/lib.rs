//! Library interface for the stepeval CLI
//!
//! This module exposes the discovery and runner internals for integration
//! testing while keeping the binary logic in main.rs.

pub mod discovery;
pub mod runner;

// Re-export commonly needed types for tests
pub use discovery::FileLocator;
pub use runner::{Evaluator, SUMMARY_FILENAME};
pub use stepeval_core::{Config, Error, Result, VideoMetrics};
