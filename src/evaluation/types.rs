//! Evaluation record types.

use serde::{Deserialize, Serialize};

use crate::error_handling::InvalidUrlError;
use crate::models::{Sample, SampleOrigin, Verdict};
use crate::scoring::RiskResult;

/// A sample together with its scoring outcome.
///
/// Scored samples carry `result` and `actual`. A sample whose URL failed
/// extraction carries `error` instead, has no `actual` verdict, and is never
/// `correct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedSample {
    pub url: String,
    #[serde(rename = "type")]
    pub origin: SampleOrigin,
    pub expected: Verdict,
    pub result: Option<RiskResult>,
    pub actual: Option<Verdict>,
    pub correct: bool,
    pub error: Option<String>,
}

impl EvaluatedSample {
    /// Combines a sample with the outcome of scoring its URL.
    pub fn new(sample: Sample, outcome: Result<RiskResult, InvalidUrlError>) -> Self {
        let Sample {
            url,
            origin,
            expected,
        } = sample;
        match outcome {
            Ok(result) => {
                let actual = Verdict::from_flag(result.is_malicious);
                Self {
                    url,
                    origin,
                    expected,
                    result: Some(result),
                    actual: Some(actual),
                    correct: actual == expected,
                    error: None,
                }
            }
            Err(e) => Self {
                url,
                origin,
                expected,
                result: None,
                actual: None,
                correct: false,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Cumulative statistics emitted after each chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchProgress {
    /// 1-based index of the chunk just finished (0 before any chunk)
    pub chunk: usize,
    pub processed: usize,
    pub total: usize,
    /// Samples whose actual verdict is malicious
    pub malicious: usize,
    /// Samples whose actual verdict is safe
    pub safe: usize,
    pub failed: usize,
    pub correct: usize,
    /// `correct / processed`, 0 when nothing has been processed
    pub accuracy: f64,
}

impl BatchProgress {
    pub fn is_complete(&self) -> bool {
        self.processed == self.total
    }

    /// Completion as a percentage; an empty dataset is 100% complete.
    pub fn percent_complete(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.processed as f64 / self.total as f64 * 100.0
        }
    }
}
