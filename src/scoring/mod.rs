//! Risk scoring.
//!
//! Combines a `FeatureVector` into a bounded risk score with a fixed linear
//! model: each feature times its weight, plus an unweighted TLD risk, scaled
//! by 20 and clamped to [0, 100].
//!
//! This is a hand-weighted model, not a trained classifier. The weights live
//! in `weights` and are tagged with `MODEL_VERSION`.

mod weights;

use serde::{Deserialize, Serialize};

use crate::error_handling::InvalidUrlError;
use crate::features::{extract, FeatureVector};

pub use weights::{tld_risk, MALICIOUS_THRESHOLD, MODEL_VERSION, UNKNOWN_TLD_RISK};
use weights::*;

/// Output of scoring a single URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Risk in [0, 100]; higher is more likely malicious
    pub risk_score: f64,
    /// `risk_score > 60`
    pub is_malicious: bool,
    /// `min(95, risk_score * 0.9)`
    pub confidence: f64,
    pub features: FeatureVector,
}

impl RiskResult {
    /// Builds a result from a final (already clamped) score.
    ///
    /// The verdict and confidence are pure functions of the score.
    pub fn from_score(risk_score: f64, features: FeatureVector) -> Self {
        let risk_score = risk_score.clamp(0.0, MAX_SCORE);
        Self {
            risk_score,
            is_malicious: risk_score > MALICIOUS_THRESHOLD,
            confidence: (risk_score * CONFIDENCE_FACTOR).min(MAX_CONFIDENCE),
            features,
        }
    }
}

/// One term of the weighted sum, for explaining a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub feature: &'static str,
    /// Feature value as fed to the model (booleans as 0/1)
    pub value: f64,
    /// 1.0 for the TLD term, which is added unweighted
    pub weight: f64,
    pub contribution: f64,
}

/// Scores `url`.
///
/// # Errors
///
/// Propagates `InvalidUrlError` from feature extraction unchanged.
///
/// # Examples
///
/// ```
/// use url_risk::score;
///
/// let result = score("http://bank-secure-login123.tk").unwrap();
/// assert!(result.is_malicious);
/// assert_eq!(result.risk_score, 100.0);
/// ```
pub fn score(url: &str) -> Result<RiskResult, InvalidUrlError> {
    let features = extract(url)?;
    Ok(score_features(features))
}

/// Scores an already extracted feature vector.
pub fn score_features(features: FeatureVector) -> RiskResult {
    let raw: f64 = contributions(&features)
        .iter()
        .map(|term| term.contribution)
        .sum();
    RiskResult::from_score(raw * SCORE_SCALE, features)
}

/// Breaks the score of `url` down into its weighted terms.
pub fn explain(url: &str) -> Result<Vec<FeatureContribution>, InvalidUrlError> {
    Ok(contributions(&extract(url)?))
}

fn contributions(features: &FeatureVector) -> Vec<FeatureContribution> {
    let flag = |b: bool| if b { 1.0 } else { 0.0 };
    let weighted = [
        ("length", features.length as f64, WEIGHT_LENGTH),
        ("has_https", flag(features.has_https), WEIGHT_HAS_HTTPS),
        ("num_dots", features.num_dots as f64, WEIGHT_NUM_DOTS),
        ("num_hyphens", features.num_hyphens as f64, WEIGHT_NUM_HYPHENS),
        ("has_ip", flag(features.has_ip), WEIGHT_HAS_IP),
        (
            "suspicious_keyword_count",
            features.suspicious_keyword_count as f64,
            WEIGHT_SUSPICIOUS_KEYWORDS,
        ),
        ("entropy", features.entropy, WEIGHT_ENTROPY),
        ("path_depth", features.path_depth as f64, WEIGHT_PATH_DEPTH),
        ("has_port", flag(features.has_port), WEIGHT_HAS_PORT),
        (
            "special_char_count",
            features.special_char_count as f64,
            WEIGHT_SPECIAL_CHARS,
        ),
    ];

    let mut terms: Vec<FeatureContribution> = weighted
        .into_iter()
        .map(|(feature, value, weight)| FeatureContribution {
            feature,
            value,
            weight,
            contribution: value * weight,
        })
        .collect();

    let tld = tld_risk(&features.tld);
    terms.push(FeatureContribution {
        feature: "tld",
        value: tld,
        weight: 1.0,
        contribution: tld,
    });
    terms
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
