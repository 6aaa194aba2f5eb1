//! url_risk library: heuristic phishing risk scoring for URLs
//!
//! This library extracts lexical features from a URL, turns them into a
//! 0-100 risk score with a fixed linear model, and measures that model
//! against synthetic labeled datasets processed in chunks.
//!
//! # Example
//!
//! ```no_run
//! use url_risk::{run_evaluation, EvaluationConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EvaluationConfig {
//!     dataset_size: 1_000,
//!     chunk_size: 100,
//!     ..Default::default()
//! };
//!
//! let run = run_evaluation(config, CancellationToken::new()).await?;
//! println!("{}", run.report.summary);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `run_evaluation` and `load_alerts` require a Tokio runtime. Scoring,
//! dataset generation and report building are synchronous.

pub mod alerts;
pub mod app;
pub mod config;
pub mod dataset;
pub mod error_handling;
pub mod evaluation;
pub mod export;
pub mod features;
pub mod history;
pub mod initialization;
pub mod models;
pub mod report;
pub mod scoring;

// Re-export public API
pub use alerts::{filter_alerts, load_alerts, AlertRecord};
pub use config::{EvaluationConfig, LogFormat, LogLevel};
pub use dataset::{generate, generate_with_rng};
pub use error_handling::{
    AlertSourceError, DatasetSizeError, HistoryError, InvalidUrlError, UndefinedMetricError,
};
pub use evaluation::{evaluate, BatchEvaluator, BatchProgress, EvaluatedSample};
pub use export::{export_csv, export_json};
pub use features::{extract, FeatureVector};
pub use history::{CheckStatus, HistoryEntry, ScanHistory};
pub use models::{Sample, SampleOrigin, Verdict};
pub use report::{build_report, ConfusionMatrix, Report, ReportSummary};
pub use run::{run_evaluation, EvaluationRun};
pub use scoring::{explain, score, FeatureContribution, RiskResult, MODEL_VERSION};

// Internal run module (contains the chunked evaluation loop)
mod run {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::{debug, info, warn};
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_failure_statistics, should_log};
    use crate::config::{EvaluationConfig, LOGGING_INTERVAL};
    use crate::error_handling::ProcessingStats;
    use crate::evaluation::BatchEvaluator;
    use crate::export::{export_report, ExportFormat, ExportOptions};
    use crate::report::Report;

    /// Results of an evaluation run.
    #[derive(Debug, Clone)]
    pub struct EvaluationRun {
        /// Report over every sample processed before the run ended
        pub report: Report,
        /// True if the run stopped early on cancellation
        pub cancelled: bool,
        /// Number of chunks processed
        pub chunks: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Generates a synthetic dataset and evaluates the scorer on it chunk by chunk.
    ///
    /// Between chunks the task yields to the runtime (and sleeps for
    /// `chunk_delay_ms` when non-zero), so other work keeps making progress
    /// during large runs. Cancellation is checked between chunks; a cancelled
    /// run still returns a report over the samples processed so far.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid (`DatasetSizeError`)
    /// - A requested CSV or JSON export cannot be written
    pub async fn run_evaluation(
        config: EvaluationConfig,
        cancel: CancellationToken,
    ) -> Result<EvaluationRun> {
        config.validate().context("Invalid evaluation configuration")?;

        let dataset = crate::dataset::generate(config.dataset_size);
        info!(
            "Generated {} samples ({} malicious)",
            dataset.len(),
            crate::dataset::malicious_count(config.dataset_size)
        );

        let stats = Arc::new(ProcessingStats::new());
        let mut evaluator = BatchEvaluator::new(dataset, config.chunk_size)
            .context("Failed to set up batch evaluation")?
            .with_stats(Arc::clone(&stats));
        info!(
            "Evaluating in {} chunk(s) of up to {} samples, started at {}",
            evaluator.chunk_count(),
            evaluator.chunk_size(),
            evaluator.started_at().to_rfc3339()
        );

        let start_time = std::time::Instant::now();
        let delay = Duration::from_millis(config.chunk_delay_ms);
        let mut cancelled = false;
        let mut chunks = 0usize;

        loop {
            if cancel.is_cancelled() {
                warn!(
                    "Evaluation cancelled after {} of {} samples",
                    evaluator.results().len(),
                    evaluator.total()
                );
                cancelled = true;
                break;
            }

            let Some(progress) = evaluator.next_chunk() else {
                break;
            };
            chunks += 1;

            if should_log(&progress, LOGGING_INTERVAL) {
                log_progress(start_time, &progress);
            } else {
                debug!(
                    "Chunk {} done: {}/{}",
                    progress.chunk, progress.processed, progress.total
                );
            }

            if progress.is_complete() {
                break;
            }

            tokio::task::yield_now().await;
            if !delay.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = cancel.cancelled() => {}
                }
            }
        }

        let report = evaluator.report();
        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Evaluated {} samples in {:.2}s",
            report.summary.total, elapsed_seconds
        );

        if let Some(path) = config.csv_output {
            let options = ExportOptions {
                output: Some(path.clone()),
                format: ExportFormat::Csv,
            };
            let rows = export_report(&report, &options)
                .with_context(|| format!("Failed to export CSV to {}", path.display()))?;
            info!("Wrote {} rows to {}", rows, path.display());
        }

        if let Some(path) = config.json_output {
            let options = ExportOptions {
                output: Some(path.clone()),
                format: ExportFormat::Json,
            };
            export_report(&report, &options)
                .with_context(|| format!("Failed to export JSON to {}", path.display()))?;
            info!("Wrote report to {}", path.display());
        }

        print_failure_statistics(&stats);

        Ok(EvaluationRun {
            report,
            cancelled,
            chunks,
            elapsed_seconds,
        })
    }
}
