//! stepeval - surgical step-recognition evaluation
//!
//! This binary scores step-label predictions against ground truth for every
//! discovered video pair and writes or logs the averaged summary.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stepeval::Evaluator;
use stepeval_core::Config;
use tracing::info;

#[derive(Parser)]
#[command(name = "stepeval")]
#[command(about = "Evaluate surgical step-recognition predictions against ground truth")]
#[command(version)]
struct Cli {
    /// Directory containing ground-truth JSON files
    #[arg(long, value_name = "DIR")]
    gt_dir: Option<PathBuf>,

    /// Directory containing prediction JSON files
    #[arg(long, value_name = "DIR")]
    pred_dir: Option<PathBuf>,

    /// Directory the metrics summary is written to, when it exists
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config =
        Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(gt_dir) = cli.gt_dir {
        config.gt_dir = gt_dir;
    }
    if let Some(pred_dir) = cli.pred_dir {
        config.pred_dir = pred_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.validate().context("Invalid configuration")?;

    let summary = Evaluator::new(config).run()?;
    info!(
        "Evaluation complete: accuracy {:.4}, f1 {:.4}, precision {:.4}, recall {:.4}",
        summary.accuracy, summary.f1, summary.precision, summary.recall
    );
    Ok(())
}

/// Initialize logging system
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(format!(
                        "stepeval={level},stepeval_core={level}"
                    ))
                }),
        )
        .init();
}
