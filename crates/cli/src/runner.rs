//! Runs the scorer over every discovered video pair, averages the per-video
//! metrics and reports the summary.

use crate::discovery::FileLocator;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use stepeval_core::{load_slice_records, Config, LabelCodec, Result, Scorer, VideoMetrics};
use tracing::{info, warn};

/// Name of the summary file written into the output directory.
pub const SUMMARY_FILENAME: &str = "metrics.json";

/// Drives a whole evaluation run: discovery, per-video scoring, aggregation
/// and reporting.
pub struct Evaluator {
    config: Config,
    locator: FileLocator,
    scorer: Scorer,
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        let locator = FileLocator::new(&config.gt_dir, &config.pred_dir);
        let scorer = Scorer::new(LabelCodec::new(), config.default_label.clone());
        Self {
            config,
            locator,
            scorer,
        }
    }

    /// Evaluates every matched video pair and reports the mean metrics.
    ///
    /// Videos without a matching prediction file are skipped with a warning
    /// and excluded from the mean. Zero scored videos is fatal: the summary
    /// would be undefined.
    pub fn run(&self) -> Result<VideoMetrics> {
        let results = self.evaluate_all()?;
        let summary = VideoMetrics::mean(&results)?;
        self.report(&summary)?;
        Ok(summary)
    }

    fn evaluate_all(&self) -> Result<Vec<VideoMetrics>> {
        info!(
            "Found {} ground truth and {} prediction JSON files",
            self.locator.ground_truth().len(),
            self.locator.predictions().len()
        );

        let mut results = Vec::new();
        for gt_path in self.locator.ground_truth() {
            let Some(pred_path) = self.locator.match_prediction(gt_path) else {
                warn!(
                    "No corresponding prediction JSON found for ground truth JSON: {}",
                    gt_path.display()
                );
                continue;
            };
            let ground_truth = load_slice_records(gt_path)?;
            let prediction = load_slice_records(pred_path)?;
            let metrics = self.scorer.score(&ground_truth, &prediction)?;
            info!(
                "Scored {}: accuracy {:.4}, f1 {:.4}",
                gt_path.display(),
                metrics.accuracy,
                metrics.f1
            );
            results.push(metrics);
        }
        Ok(results)
    }

    fn report(&self, summary: &VideoMetrics) -> Result<()> {
        if self.config.output_dir.is_dir() {
            let path = self.config.output_dir.join(SUMMARY_FILENAME);
            info!("Writing evaluation results to {}", path.display());
            write_pretty_json(&path, summary)?;
        } else {
            info!(
                "No {} directory found, evaluation results will not be written to a file",
                self.config.output_dir.display()
            );
            info!(
                "Summary: accuracy {:.4}, f1 {:.4}, precision {:.4}, recall {:.4}",
                summary.accuracy, summary.f1, summary.precision, summary.recall
            );
        }
        Ok(())
    }
}

/// Writes `value` as JSON indented with four spaces, the format the challenge
/// platform expects for `metrics.json`.
fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer).map_err(anyhow::Error::from)?;
    writer.flush()?;
    Ok(())
}
