//! Core types for the stepeval surgical step-recognition evaluator
//!
//! This crate provides the building blocks shared by the evaluation binary:
//!
//! - **Labels**: the fixed step-label vocabulary and its integer codec
//! - **Records**: per-slice labels read from ground-truth/prediction JSON
//! - **Metrics**: multi-class accuracy and support-weighted P/R/F1
//! - **Scorer**: per-video join and metric computation
//! - **Configuration**: run configuration management
//! - **Error handling**: unified error types
//!

pub mod config;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod records;
pub mod scorer;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use labels::{LabelCodec, DEFAULT_LABEL, STEP_LABELS};
pub use records::{load_slice_records, SliceRecord};
pub use scorer::{Scorer, VideoMetrics};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
