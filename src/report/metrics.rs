//! Confusion matrix and the ratios derived from it.

use serde::{Deserialize, Serialize};

use crate::error_handling::UndefinedMetricError;
use crate::evaluation::EvaluatedSample;
use crate::models::Verdict;

/// 2x2 counts of expected vs. actual verdicts, malicious as the positive class.
///
/// Samples that failed scoring have no actual verdict and are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    pub fn from_results(results: &[EvaluatedSample]) -> Self {
        let mut matrix = Self::default();
        for result in results {
            match (result.expected, result.actual) {
                (Verdict::Malicious, Some(Verdict::Malicious)) => matrix.true_positives += 1,
                (Verdict::Safe, Some(Verdict::Malicious)) => matrix.false_positives += 1,
                (Verdict::Safe, Some(Verdict::Safe)) => matrix.true_negatives += 1,
                (Verdict::Malicious, Some(Verdict::Safe)) => matrix.false_negatives += 1,
                (_, None) => {}
            }
        }
        matrix
    }

    /// Samples counted in the matrix.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// `(TP + TN) / total`, where `total` may include failed samples.
    pub fn accuracy_over(&self, total: usize) -> Result<f64, UndefinedMetricError> {
        ratio(
            "accuracy",
            self.true_positives + self.true_negatives,
            total,
        )
    }

    /// `TP / (TP + FP)`.
    pub fn precision(&self) -> Result<f64, UndefinedMetricError> {
        ratio(
            "precision",
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    /// `TP / (TP + FN)`.
    pub fn recall(&self) -> Result<f64, UndefinedMetricError> {
        ratio(
            "recall",
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// Harmonic mean of precision and recall.
    ///
    /// Undefined when either input is undefined or both are zero.
    pub fn f1(&self) -> Result<f64, UndefinedMetricError> {
        let undefined = UndefinedMetricError { metric: "f1" };
        let precision = self.precision().map_err(|_| undefined)?;
        let recall = self.recall().map_err(|_| undefined)?;
        let sum = precision + recall;
        if sum == 0.0 {
            return Err(undefined);
        }
        Ok(2.0 * precision * recall / sum)
    }
}

fn ratio(
    metric: &'static str,
    numerator: usize,
    denominator: usize,
) -> Result<f64, UndefinedMetricError> {
    if denominator == 0 {
        return Err(UndefinedMetricError { metric });
    }
    Ok(numerator as f64 / denominator as f64)
}

/// Converts a raw ratio to a percentage rounded to 2 decimal places.
pub fn to_percent(ratio: f64) -> f64 {
    (ratio * 100.0 * 100.0).round() / 100.0
}
