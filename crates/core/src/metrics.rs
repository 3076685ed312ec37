//! Multi-class classification metrics over encoded label sequences.
//!
//! All functions take parallel slices of integer class codes produced by the
//! label codec. Aggregated precision/recall/F1 use support weighting: each
//! class's score is weighted by its number of true instances, so classes that
//! never appear in the ground truth contribute nothing.

use serde::{Deserialize, Serialize};

/// Per-class counts and scores for one class of the confusion table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    /// Number of true instances of this class
    pub support: usize,
    /// TP / (TP + FP); 0.0 when the class is never predicted
    pub precision: f64,
    /// TP / (TP + FN); 0.0 when the class has no true instances
    pub recall: f64,
    /// Harmonic mean of precision and recall; 0.0 when both are 0
    pub f1: f64,
}

/// Support-weighted precision, recall and F1 for a label sequence pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedScores {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Exact-match rate between two equal-length code sequences.
///
/// Returns 0.0 for empty input; callers are expected to reject empty
/// sequences before metric computation.
pub fn accuracy(truth: &[usize], predicted: &[usize]) -> f64 {
    debug_assert_eq!(truth.len(), predicted.len());
    if truth.is_empty() {
        return 0.0;
    }
    let hits = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t == p)
        .count();
    hits as f64 / truth.len() as f64
}

/// Computes per-class precision/recall/F1 for every class code in
/// `0..num_classes`.
///
/// Division-by-zero convention: a class with zero predicted instances has
/// precision 0, a class with zero true instances has recall 0, and F1 is 0
/// whenever precision + recall is 0.
pub fn per_class_scores(truth: &[usize], predicted: &[usize], num_classes: usize) -> Vec<ClassScores> {
    debug_assert_eq!(truth.len(), predicted.len());

    let mut true_counts = vec![0usize; num_classes];
    let mut pred_counts = vec![0usize; num_classes];
    let mut tp_counts = vec![0usize; num_classes];
    for (&t, &p) in truth.iter().zip(predicted) {
        true_counts[t] += 1;
        pred_counts[p] += 1;
        if t == p {
            tp_counts[t] += 1;
        }
    }

    (0..num_classes)
        .map(|class| {
            let tp = tp_counts[class] as f64;
            let precision = ratio_or_zero(tp, pred_counts[class]);
            let recall = ratio_or_zero(tp, true_counts[class]);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            ClassScores {
                support: true_counts[class],
                precision,
                recall,
                f1,
            }
        })
        .collect()
}

/// Averages per-class scores weighted by each class's ground-truth support.
pub fn weighted_scores(truth: &[usize], predicted: &[usize], num_classes: usize) -> WeightedScores {
    let per_class = per_class_scores(truth, predicted, num_classes);
    let total_support: usize = per_class.iter().map(|s| s.support).sum();
    if total_support == 0 {
        return WeightedScores {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }

    let weight = |support: usize| support as f64 / total_support as f64;
    WeightedScores {
        precision: per_class
            .iter()
            .map(|s| s.precision * weight(s.support))
            .sum(),
        recall: per_class.iter().map(|s| s.recall * weight(s.support)).sum(),
        f1: per_class.iter().map(|s| s.f1 * weight(s.support)).sum(),
    }
}

fn ratio_or_zero(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}
