//! Slice records: the per-frame rows read from ground-truth and prediction
//! JSON files.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One labeled temporal unit of a surgical video.
///
/// Ground-truth and prediction files each contain a JSON array of these for a
/// single video. Extra fields in the input objects are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceRecord {
    /// Slice/frame index, unique per video
    pub slice_nr: u64,
    /// Step category for this slice
    pub step_label: String,
}

/// Loads a JSON file containing an array of slice records.
pub fn load_slice_records(path: &Path) -> Result<Vec<SliceRecord>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| Error::decode(path.display().to_string(), e))
}
