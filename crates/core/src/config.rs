//! Configuration for an evaluation run.
//!
//! Configuration can be loaded from a TOML file and/or environment variables;
//! every field has a default matching the challenge container layout, so a
//! bare run with no config file evaluates `true_jsons/` against `pred_jsons/`
//! and writes to `/output/` when it exists.

use crate::error::{Error, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing ground-truth JSON files
    #[serde(default = "default_gt_dir")]
    pub gt_dir: PathBuf,

    /// Directory containing prediction JSON files
    #[serde(default = "default_pred_dir")]
    pub pred_dir: PathBuf,

    /// Directory the summary is written to, when it exists on the host
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Label assigned to ground-truth slices with no matching prediction
    #[serde(default = "default_fill_label")]
    pub default_label: String,
}

fn default_gt_dir() -> PathBuf {
    PathBuf::from("true_jsons")
}

fn default_pred_dir() -> PathBuf {
    PathBuf::from("pred_jsons")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/output")
}

fn default_fill_label() -> String {
    crate::labels::DEFAULT_LABEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gt_dir: default_gt_dir(),
            pred_dir: default_pred_dir(),
            output_dir: default_output_dir(),
            default_label: default_fill_label(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file with environment variable
    /// overrides.
    ///
    /// Environment variables are prefixed with `STEPEVAL_`, e.g.
    /// `STEPEVAL_GT_DIR=/input/true_jsons`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = ConfigBuilder::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("STEPEVAL"))
            .build()
            .map_err(|e| Error::config(format!("Failed to load config: {e}")))?;

        settings
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Loads from `path` when given, otherwise environment overrides on top
    /// of the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let settings = ConfigBuilder::builder()
                    .add_source(Environment::with_prefix("STEPEVAL"))
                    .build()
                    .map_err(|e| Error::config(format!("Failed to load config: {e}")))?;
                settings
                    .try_deserialize()
                    .map_err(|e| Error::config(format!("Failed to parse config: {e}")))
            }
        }
    }

    /// Validates that the configured fill label is encodable.
    pub fn validate(&self) -> Result<()> {
        crate::labels::LabelCodec::new()
            .encode(&self.default_label)
            .map_err(|_| {
                Error::config(format!(
                    "default_label {:?} is not in the step-label vocabulary",
                    self.default_label
                ))
            })?;
        Ok(())
    }
}
