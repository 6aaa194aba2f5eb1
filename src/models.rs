//! Shared record types for datasets and evaluation.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Ground-truth or predicted label for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    Safe,
    Malicious,
}

impl Verdict {
    /// Maps the scorer's binary decision to a verdict.
    pub fn from_flag(is_malicious: bool) -> Self {
        if is_malicious {
            Verdict::Malicious
        } else {
            Verdict::Safe
        }
    }
}

/// Which generator branch produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SampleOrigin {
    Genuine,
    Malicious,
}

/// A labeled URL produced by the synthetic dataset generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub url: String,
    #[serde(rename = "type")]
    pub origin: SampleOrigin,
    pub expected: Verdict,
}

impl Sample {
    pub fn genuine(url: String) -> Self {
        Self {
            url,
            origin: SampleOrigin::Genuine,
            expected: Verdict::Safe,
        }
    }

    pub fn malicious(url: String) -> Self {
        Self {
            url,
            origin: SampleOrigin::Malicious,
            expected: Verdict::Malicious,
        }
    }
}
