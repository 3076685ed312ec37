//! Fixed label vocabulary and the codec that maps labels to integer codes.
//!
//! The vocabulary is the closed set of recognized surgical-step categories,
//! including the `none` background category and the `other` catch-all. The
//! integer codes are only used internally for metric computation and are never
//! surfaced, so their concrete values are irrelevant as long as they are
//! consistent within a run.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// The closed set of recognized surgical-step categories.
pub const STEP_LABELS: [&str; 9] = [
    "none",
    "range_of_motion",
    "rectal_artery_vein",
    "retraction_collision_avoidance",
    "skills_application",
    "suspensory_ligaments",
    "suturing",
    "uterine_horn",
    "other",
];

/// The background label assigned to ground-truth slices with no prediction.
pub const DEFAULT_LABEL: &str = "none";

/// Maps step-label strings to integer codes and back.
///
/// Constructed once from the fixed vocabulary; deterministic and stateless
/// after construction. Encoding an out-of-vocabulary label is an error, not a
/// coercion.
#[derive(Debug, Clone)]
pub struct LabelCodec {
    labels: Vec<String>,
    codes: HashMap<String, usize>,
}

impl LabelCodec {
    /// Creates a codec over the fixed step-label vocabulary.
    pub fn new() -> Self {
        Self::from_labels(STEP_LABELS.iter().map(|l| l.to_string()))
    }

    /// Creates a codec over an explicit label set. Later duplicates are
    /// ignored so codes stay stable under repetition.
    pub fn from_labels(labels: impl IntoIterator<Item = String>) -> Self {
        let mut codec = Self {
            labels: Vec::new(),
            codes: HashMap::new(),
        };
        for label in labels {
            if !codec.codes.contains_key(&label) {
                codec.codes.insert(label.clone(), codec.labels.len());
                codec.labels.push(label);
            }
        }
        codec
    }

    /// Returns the integer code for `label`, or `Error::UnknownLabel` if the
    /// label is outside the vocabulary.
    pub fn encode(&self, label: &str) -> Result<usize> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| Error::unknown_label(label))
    }

    /// Returns the label for `code`, or `None` if the code is out of range.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Number of classes in the vocabulary.
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }
}

impl Default for LabelCodec {
    fn default() -> Self {
        Self::new()
    }
}
