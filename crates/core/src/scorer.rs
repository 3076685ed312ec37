//! Per-video scoring: joins a ground-truth/prediction pair on the slice index
//! and computes classification metrics over the joined table.

use crate::error::{Error, Result};
use crate::labels::LabelCodec;
use crate::metrics;
use crate::records::SliceRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four classification metrics computed for one video.
///
/// Also used for the cross-video summary, which is the arithmetic mean of the
/// per-video values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoMetrics {
    pub accuracy: f64,
    pub f1: f64,
    pub precision: f64,
    pub recall: f64,
}

impl VideoMetrics {
    /// Unweighted arithmetic mean across per-video metrics.
    ///
    /// An empty input means no videos were scored, which makes the summary
    /// undefined; that is a fatal condition rather than a NaN summary.
    pub fn mean(results: &[VideoMetrics]) -> Result<VideoMetrics> {
        if results.is_empty() {
            return Err(Error::no_data("no videos were scored"));
        }
        let n = results.len() as f64;
        Ok(VideoMetrics {
            accuracy: results.iter().map(|m| m.accuracy).sum::<f64>() / n,
            f1: results.iter().map(|m| m.f1).sum::<f64>() / n,
            precision: results.iter().map(|m| m.precision).sum::<f64>() / n,
            recall: results.iter().map(|m| m.recall).sum::<f64>() / n,
        })
    }
}

/// Scores one video's predictions against its ground truth.
#[derive(Debug, Clone)]
pub struct Scorer {
    codec: LabelCodec,
    default_label: String,
}

impl Scorer {
    pub fn new(codec: LabelCodec, default_label: impl Into<String>) -> Self {
        Self {
            codec,
            default_label: default_label.into(),
        }
    }

    /// Computes accuracy and support-weighted F1/precision/recall for one
    /// ground-truth/prediction pair.
    ///
    /// The pair is outer-joined on `slice_nr`, anchored on the ground truth:
    /// every ground-truth slice appears exactly once, and slices with no
    /// matching prediction are scored against the default background label.
    /// Prediction slices absent from the ground truth are dropped.
    pub fn score(
        &self,
        ground_truth: &[SliceRecord],
        prediction: &[SliceRecord],
    ) -> Result<VideoMetrics> {
        if ground_truth.is_empty() {
            return Err(Error::no_data("ground truth contains no slices"));
        }

        let predicted_by_slice = index_by_slice(prediction, "prediction")?;
        check_unique_slices(ground_truth, "ground truth")?;

        let mut truth = Vec::with_capacity(ground_truth.len());
        let mut predicted = Vec::with_capacity(ground_truth.len());
        for record in ground_truth {
            let predicted_label = predicted_by_slice
                .get(&record.slice_nr)
                .copied()
                .unwrap_or(self.default_label.as_str());
            truth.push(self.codec.encode(&record.step_label)?);
            predicted.push(self.codec.encode(predicted_label)?);
        }

        let weighted = metrics::weighted_scores(&truth, &predicted, self.codec.num_classes());
        Ok(VideoMetrics {
            accuracy: metrics::accuracy(&truth, &predicted),
            f1: weighted.f1,
            precision: weighted.precision,
            recall: weighted.recall,
        })
    }
}

/// Builds a slice_nr -> label map, rejecting duplicate indices that would make
/// the join ambiguous.
fn index_by_slice<'a>(
    records: &'a [SliceRecord],
    side: &str,
) -> Result<HashMap<u64, &'a str>> {
    let mut by_slice = HashMap::with_capacity(records.len());
    for record in records {
        if by_slice
            .insert(record.slice_nr, record.step_label.as_str())
            .is_some()
        {
            return Err(Error::join(format!(
                "duplicate slice_nr {} in {side}",
                record.slice_nr
            )));
        }
    }
    Ok(by_slice)
}

fn check_unique_slices(records: &[SliceRecord], side: &str) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.slice_nr) {
            return Err(Error::join(format!(
                "duplicate slice_nr {} in {side}",
                record.slice_nr
            )));
        }
    }
    Ok(())
}
