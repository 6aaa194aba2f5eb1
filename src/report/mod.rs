//! Evaluation reports.
//!
//! Aggregates evaluated samples into a confusion matrix and summary metrics.
//! Ratios with a zero denominator are reported as undefined (`None`), never
//! as 0%.

mod metrics;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evaluation::EvaluatedSample;
use crate::models::Verdict;
use crate::scoring::MODEL_VERSION;

pub use metrics::{to_percent, ConfusionMatrix};

/// Headline numbers of a report. Percentages are rounded to 2 decimals;
/// `None` means the metric is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub malicious_labeled: usize,
    pub genuine_labeled: usize,
    /// Samples that could not be scored
    pub failed: usize,
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

/// Read-only evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub model_version: String,
    pub summary: ReportSummary,
    pub confusion_matrix: ConfusionMatrix,
    pub details: Vec<EvaluatedSample>,
}

/// Builds a report from completed or partial results.
///
/// # Examples
///
/// ```
/// use url_risk::{build_report, evaluate, Sample};
///
/// let results = evaluate(vec![Sample::genuine("https://www.google.com".into())], 1).unwrap();
/// let report = build_report(&results);
/// assert_eq!(report.summary.accuracy, Some(100.0));
/// // No positives were predicted, so precision is undefined rather than 0%
/// assert_eq!(report.summary.precision, None);
/// ```
pub fn build_report(results: &[EvaluatedSample]) -> Report {
    let confusion_matrix = ConfusionMatrix::from_results(results);
    let total = results.len();
    let malicious_labeled = results
        .iter()
        .filter(|r| r.expected == Verdict::Malicious)
        .count();
    let failed = results.iter().filter(|r| r.is_failed()).count();

    let summary = ReportSummary {
        total,
        malicious_labeled,
        genuine_labeled: total - malicious_labeled,
        failed,
        accuracy: confusion_matrix.accuracy_over(total).ok().map(to_percent),
        precision: confusion_matrix.precision().ok().map(to_percent),
        recall: confusion_matrix.recall().ok().map(to_percent),
        f1: confusion_matrix.f1().ok().map(to_percent),
    };

    Report {
        model_version: MODEL_VERSION.to_string(),
        summary,
        confusion_matrix,
        details: results.to_vec(),
    }
}

/// Formats an optional percentage, showing `undefined` for `None`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "undefined".to_string(),
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={} malicious={} genuine={} failed={} accuracy={} precision={} recall={} f1={}",
            self.total,
            self.malicious_labeled,
            self.genuine_labeled,
            self.failed,
            format_percent(self.accuracy),
            format_percent(self.precision),
            format_percent(self.recall),
            format_percent(self.f1),
        )
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
