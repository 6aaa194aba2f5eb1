//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, ProcessingStats};
use crate::report::{format_percent, Report};

/// Logs the headline numbers and confusion matrix of a report.
pub fn print_report_summary(report: &Report) {
    let summary = &report.summary;
    let matrix = &report.confusion_matrix;
    info!("Model: {}", report.model_version);
    info!(
        "Samples: {} total ({} malicious-labeled, {} genuine-labeled, {} failed)",
        summary.total, summary.malicious_labeled, summary.genuine_labeled, summary.failed
    );
    info!(
        "Accuracy: {}  Precision: {}  Recall: {}  F1: {}",
        format_percent(summary.accuracy),
        format_percent(summary.precision),
        format_percent(summary.recall),
        format_percent(summary.f1)
    );
    info!(
        "Confusion matrix: TP={} FP={} TN={} FN={}",
        matrix.true_positives, matrix.false_positives, matrix.true_negatives, matrix.false_negatives
    );
}

/// Logs per-kind failure counts, if any samples failed.
pub fn print_failure_statistics(stats: &ProcessingStats) {
    let total = stats.total_failures();
    if total == 0 {
        return;
    }
    info!("Failure Counts ({} total):", total);
    for kind in FailureKind::iter() {
        let count = stats.get_failure_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
