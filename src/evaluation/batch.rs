//! Chunked batch evaluation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::types::{BatchProgress, EvaluatedSample};
use crate::error_handling::{update_failure_stats, DatasetSizeError, ProcessingStats};
use crate::models::{Sample, Verdict};
use crate::report::{build_report, Report};
use crate::scoring::score;

/// Mutable state of one evaluation session.
#[derive(Debug)]
struct BatchState {
    dataset: Vec<Sample>,
    /// Index of the next unprocessed sample
    cursor: usize,
    chunk_size: usize,
    results: Vec<EvaluatedSample>,
    started_at: DateTime<Utc>,
}

/// Running counters, updated as each sample lands.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    chunks: usize,
    malicious: usize,
    safe: usize,
    failed: usize,
    correct: usize,
}

/// Scores a dataset chunk by chunk.
///
/// Each call to `next()` scores at most `chunk_size` samples, appends them to
/// the accumulated results and returns a cumulative `BatchProgress`. The
/// iterator ends when every sample has been scored. Chunking only paces the
/// work: the accumulated results do not depend on `chunk_size`.
///
/// Results (and a report over them) can be read between any two chunks, so a
/// caller that stops early still holds a valid partial evaluation.
///
/// # Examples
///
/// ```
/// use url_risk::{generate, BatchEvaluator};
///
/// let mut evaluator = BatchEvaluator::new(generate(25), 10).unwrap();
/// let snapshots: Vec<_> = evaluator.by_ref().collect();
/// assert_eq!(snapshots.len(), 3);
/// assert_eq!(snapshots[2].processed, 25);
/// assert!(evaluator.is_complete());
/// ```
#[derive(Debug)]
pub struct BatchEvaluator {
    state: BatchState,
    tally: Tally,
    stats: Arc<ProcessingStats>,
    /// Set by `with_stats`; the caller owns the counters
    shared_stats: bool,
}

impl BatchEvaluator {
    /// Creates an evaluator over `dataset`.
    ///
    /// # Errors
    ///
    /// Returns `DatasetSizeError::ZeroChunkSize` if `chunk_size` is 0.
    pub fn new(dataset: Vec<Sample>, chunk_size: usize) -> Result<Self, DatasetSizeError> {
        if chunk_size == 0 {
            return Err(DatasetSizeError::ZeroChunkSize);
        }
        Ok(Self {
            state: BatchState {
                results: Vec::with_capacity(dataset.len()),
                dataset,
                cursor: 0,
                chunk_size,
                started_at: Utc::now(),
            },
            tally: Tally::default(),
            stats: Arc::new(ProcessingStats::new()),
            shared_stats: false,
        })
    }

    /// Uses a shared failure tracker instead of a private one.
    ///
    /// A shared tracker is never reset by `restart`.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self.shared_stats = true;
        self
    }

    /// Scores the next chunk and returns the cumulative progress, or `None`
    /// once the dataset is exhausted.
    pub fn next_chunk(&mut self) -> Option<BatchProgress> {
        if self.is_complete() {
            return None;
        }

        let start = self.state.cursor;
        let end = (start + self.state.chunk_size).min(self.state.dataset.len());
        debug!("Scoring chunk {} (samples {}..{})", self.tally.chunks + 1, start, end);

        let chunk: Vec<EvaluatedSample> = self.state.dataset[start..end]
            .iter()
            .map(|sample| self.evaluate_sample(sample))
            .collect();
        for evaluated in &chunk {
            self.tally_sample(evaluated);
        }

        // The chunk is fully materialized before the cursor moves
        self.state.results.extend(chunk);
        self.state.cursor = end;
        self.tally.chunks += 1;
        Some(self.progress())
    }

    fn evaluate_sample(&self, sample: &Sample) -> EvaluatedSample {
        let outcome = score(&sample.url);
        if let Err(e) = &outcome {
            warn!("Failed to score sample: {}", e);
            update_failure_stats(&self.stats, e);
        }
        EvaluatedSample::new(sample.clone(), outcome)
    }

    fn tally_sample(&mut self, evaluated: &EvaluatedSample) {
        match evaluated.actual {
            Some(Verdict::Malicious) => self.tally.malicious += 1,
            Some(Verdict::Safe) => self.tally.safe += 1,
            None => self.tally.failed += 1,
        }
        if evaluated.correct {
            self.tally.correct += 1;
        }
    }

    /// Cumulative progress so far.
    pub fn progress(&self) -> BatchProgress {
        let processed = self.state.results.len();
        let accuracy = if processed == 0 {
            0.0
        } else {
            self.tally.correct as f64 / processed as f64
        };
        BatchProgress {
            chunk: self.tally.chunks,
            processed,
            total: self.state.dataset.len(),
            malicious: self.tally.malicious,
            safe: self.tally.safe,
            failed: self.tally.failed,
            correct: self.tally.correct,
            accuracy,
        }
    }

    /// Forgets all results and starts again from the first sample.
    ///
    /// Failure counters are cleared only when the tracker is private.
    pub fn restart(&mut self) {
        self.state.cursor = 0;
        self.state.results.clear();
        self.state.started_at = Utc::now();
        self.tally = Tally::default();
        if !self.shared_stats {
            self.stats.reset();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state.cursor >= self.state.dataset.len()
    }

    /// Results accumulated so far, in dataset order.
    pub fn results(&self) -> &[EvaluatedSample] {
        &self.state.results
    }

    pub fn into_results(self) -> Vec<EvaluatedSample> {
        self.state.results
    }

    /// Builds a report over the results accumulated so far.
    pub fn report(&self) -> Report {
        build_report(&self.state.results)
    }

    pub fn chunk_size(&self) -> usize {
        self.state.chunk_size
    }

    pub fn total(&self) -> usize {
        self.state.dataset.len()
    }

    /// Number of chunks a full pass takes.
    pub fn chunk_count(&self) -> usize {
        self.state.dataset.len().div_ceil(self.state.chunk_size)
    }

    /// When the current pass began (creation or last `restart`).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.state.started_at
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }
}

impl Iterator for BatchEvaluator {
    type Item = BatchProgress;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk()
    }
}

/// Scores the whole dataset and returns the ordered results.
///
/// # Errors
///
/// Returns `DatasetSizeError::ZeroChunkSize` if `chunk_size` is 0.
pub fn evaluate(
    dataset: Vec<Sample>,
    chunk_size: usize,
) -> Result<Vec<EvaluatedSample>, DatasetSizeError> {
    let mut evaluator = BatchEvaluator::new(dataset, chunk_size)?;
    for _ in evaluator.by_ref() {}
    Ok(evaluator.into_results())
}
