//! Integration tests for the full evaluation pipeline
//!
//! These tests exercise discovery, pairing, per-video scoring, aggregation
//! and summary reporting against real files in temporary directories.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use stepeval::{Config, Error, Evaluator, SUMMARY_FILENAME};
use tempfile::TempDir;

/// Lays out a challenge-style working directory with ground-truth and
/// prediction subdirectories plus an existing output directory.
struct TestRun {
    _workdir: TempDir,
    config: Config,
}

impl TestRun {
    fn new() -> Self {
        let workdir = TempDir::new().unwrap();
        let config = Config {
            gt_dir: workdir.path().join("true_jsons"),
            pred_dir: workdir.path().join("pred_jsons"),
            output_dir: workdir.path().join("output"),
            ..Config::default()
        };
        fs::create_dir(&config.gt_dir).unwrap();
        fs::create_dir(&config.pred_dir).unwrap();
        fs::create_dir(&config.output_dir).unwrap();
        Self {
            _workdir: workdir,
            config,
        }
    }

    fn write_gt(&self, name: &str, body: &str) {
        fs::write(self.config.gt_dir.join(name), body).unwrap();
    }

    fn write_pred(&self, name: &str, body: &str) {
        fs::write(self.config.pred_dir.join(name), body).unwrap();
    }

    fn summary_path(&self) -> std::path::PathBuf {
        self.config.output_dir.join(SUMMARY_FILENAME)
    }
}

fn read_summary(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn end_to_end_half_right_prediction() {
    let run = TestRun::new();
    run.write_gt(
        "video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}, {"slice_nr": 1, "step_label": "none"}]"#,
    );
    run.write_pred(
        "pred_video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}, {"slice_nr": 1, "step_label": "suturing"}]"#,
    );

    let summary = Evaluator::new(run.config.clone()).run().unwrap();
    assert!((summary.accuracy - 0.5).abs() < 1e-9);

    let written = read_summary(&run.summary_path());
    let keys: Vec<_> = written.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["accuracy", "f1", "precision", "recall"]);
    assert!((written["accuracy"].as_f64().unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn summary_averages_across_videos() {
    let run = TestRun::new();
    // video_1: everything right -> accuracy 1.0
    run.write_gt(
        "video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );
    run.write_pred(
        "pred_video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );
    // video_2: everything wrong -> accuracy 0.0
    run.write_gt(
        "video_2.json",
        r#"[{"slice_nr": 0, "step_label": "uterine_horn"}]"#,
    );
    run.write_pred(
        "pred_video_2.json",
        r#"[{"slice_nr": 0, "step_label": "other"}]"#,
    );

    let summary = Evaluator::new(run.config).run().unwrap();
    assert!((summary.accuracy - 0.5).abs() < 1e-9);
    assert!((summary.precision - 0.5).abs() < 1e-9);
}

#[test]
fn unmatched_videos_are_skipped_not_zeroed() {
    let run = TestRun::new();
    run.write_gt(
        "video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );
    run.write_pred(
        "pred_video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );
    // No prediction for video_2: it must not drag the mean down.
    run.write_gt(
        "video_2.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );

    let summary = Evaluator::new(run.config).run().unwrap();
    assert!((summary.accuracy - 1.0).abs() < 1e-9);
}

#[test]
fn missing_output_directory_skips_the_file() {
    let run = TestRun::new();
    fs::remove_dir(&run.config.output_dir).unwrap();
    run.write_gt(
        "video_1.json",
        r#"[{"slice_nr": 0, "step_label": "none"}]"#,
    );
    run.write_pred(
        "pred_video_1.json",
        r#"[{"slice_nr": 0, "step_label": "none"}]"#,
    );

    let summary = Evaluator::new(run.config.clone()).run().unwrap();
    assert!((summary.accuracy - 1.0).abs() < 1e-9);
    assert!(!run.summary_path().exists());
}

#[test]
fn zero_scored_videos_is_no_data() {
    let run = TestRun::new();
    run.write_gt(
        "video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );
    // Prediction exists but matches nothing.
    run.write_pred(
        "unrelated.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );

    let err = Evaluator::new(run.config.clone()).run().unwrap_err();
    assert!(matches!(err, Error::NoData(_)));
    assert!(!run.summary_path().exists());
}

#[test]
fn out_of_vocabulary_label_aborts_without_output() {
    let run = TestRun::new();
    run.write_gt(
        "video_1.json",
        r#"[{"slice_nr": 0, "step_label": "knot_tying"}]"#,
    );
    run.write_pred(
        "pred_video_1.json",
        r#"[{"slice_nr": 0, "step_label": "none"}]"#,
    );

    let err = Evaluator::new(run.config.clone()).run().unwrap_err();
    assert!(matches!(err, Error::UnknownLabel(_)));
    assert!(!run.summary_path().exists());
}

#[test]
fn summary_file_is_indented_with_four_spaces() {
    let run = TestRun::new();
    run.write_gt(
        "video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );
    run.write_pred(
        "pred_video_1.json",
        r#"[{"slice_nr": 0, "step_label": "suturing"}]"#,
    );

    Evaluator::new(run.config.clone()).run().unwrap();
    let contents = fs::read_to_string(run.summary_path()).unwrap();
    for key in ["accuracy", "f1", "precision", "recall"] {
        assert!(
            contents.contains(&format!("\n    \"{key}\"")),
            "key {key} not indented with four spaces:\n{contents}"
        );
    }
}
