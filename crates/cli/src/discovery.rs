//! File discovery and ground-truth/prediction pairing.
//!
//! A prediction file corresponds to a ground-truth file when the ground-truth
//! file name is a substring of the prediction file name. Discovery is sorted
//! lexicographically so runs are reproducible regardless of filesystem
//! enumeration order.

use glob::glob;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Discovers ground-truth and prediction files and pairs them by filename
/// containment.
#[derive(Debug, Clone)]
pub struct FileLocator {
    ground_truth: Vec<PathBuf>,
    predictions: Vec<PathBuf>,
}

impl FileLocator {
    /// Scans the two directories for `*.json` files. Missing directories
    /// yield empty lists, not errors.
    pub fn new(gt_dir: &Path, pred_dir: &Path) -> Self {
        Self {
            ground_truth: list_json_files(gt_dir),
            predictions: list_json_files(pred_dir),
        }
    }

    /// Builds a locator over explicit file lists, bypassing the filesystem
    /// scan. Lists are sorted so pairing stays order-independent.
    pub fn from_files(mut ground_truth: Vec<PathBuf>, mut predictions: Vec<PathBuf>) -> Self {
        ground_truth.sort();
        predictions.sort();
        Self {
            ground_truth,
            predictions,
        }
    }

    /// Discovered ground-truth files, lexicographically sorted.
    pub fn ground_truth(&self) -> &[PathBuf] {
        &self.ground_truth
    }

    /// Discovered prediction files, lexicographically sorted.
    pub fn predictions(&self) -> &[PathBuf] {
        &self.predictions
    }

    /// Returns the prediction file whose name contains `gt_path`'s file name,
    /// or `None` if no prediction matches.
    ///
    /// At most one prediction should match; when several do, the first in
    /// sort order is used and a warning is logged.
    pub fn match_prediction(&self, gt_path: &Path) -> Option<&Path> {
        let gt_name = gt_path.file_name()?.to_str()?;
        let mut candidates = self.predictions.iter().filter(|p| {
            p.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.contains(gt_name))
        });

        let first = candidates.next()?;
        if candidates.next().is_some() {
            warn!(
                "Multiple prediction files match {}; using {}",
                gt_path.display(),
                first.display()
            );
        }
        Some(first.as_path())
    }
}

/// Lists `*.json` files directly under `dir`, sorted lexicographically.
fn list_json_files(dir: &Path) -> Vec<PathBuf> {
    let Some(pattern) = dir.join("*.json").to_str().map(str::to_string) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = match glob(&pattern) {
        Ok(paths) => paths.filter_map(std::result::Result::ok).collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}
