//! Progress logging utilities.

use log::info;

use crate::evaluation::BatchProgress;

/// Logs cumulative progress after a chunk.
///
/// # Arguments
///
/// * `start_time` - When the evaluation started
/// * `progress` - Snapshot returned by the evaluator for the chunk just finished
pub fn log_progress(start_time: std::time::Instant, progress: &BatchProgress) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        progress.processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Chunk {}: {}/{} samples ({:.1}%) in {:.2}s (~{:.0} samples/sec) - {} malicious, {} safe, {} failed, accuracy {:.2}%",
        progress.chunk,
        progress.processed,
        progress.total,
        progress.percent_complete(),
        elapsed_secs,
        rate,
        progress.malicious,
        progress.safe,
        progress.failed,
        progress.accuracy * 100.0
    );
}

/// Whether the chunk with this progress should be logged at `info`.
///
/// Every `interval`-th chunk is logged, plus the last one.
pub fn should_log(progress: &BatchProgress, interval: usize) -> bool {
    progress.is_complete() || (interval > 0 && progress.chunk % interval == 0)
}
