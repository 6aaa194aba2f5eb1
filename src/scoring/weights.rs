//! Static model parameters.
//!
//! These weights and the TLD table define the model. Changing any of them is
//! a new model version; bump `MODEL_VERSION` alongside.

/// Identifier of the weight set below.
pub const MODEL_VERSION: &str = "static-linear-v1";

pub const WEIGHT_LENGTH: f64 = 0.1;
pub const WEIGHT_HAS_HTTPS: f64 = -0.3;
pub const WEIGHT_NUM_DOTS: f64 = 0.2;
pub const WEIGHT_NUM_HYPHENS: f64 = 0.15;
pub const WEIGHT_HAS_IP: f64 = 0.8;
pub const WEIGHT_SUSPICIOUS_KEYWORDS: f64 = 0.25;
pub const WEIGHT_ENTROPY: f64 = 0.12;
pub const WEIGHT_PATH_DEPTH: f64 = 0.05;
pub const WEIGHT_HAS_PORT: f64 = 0.3;
pub const WEIGHT_SPECIAL_CHARS: f64 = 0.18;

/// Risk added for a TLD missing from `TLD_RISK`.
pub const UNKNOWN_TLD_RISK: f64 = 0.3;

/// Per-TLD risk, added once and unweighted.
pub const TLD_RISK: &[(&str, f64)] = &[
    ("com", 0.1),
    ("org", 0.1),
    ("net", 0.1),
    ("edu", 0.0),
    ("gov", 0.0),
    ("xyz", 0.7),
    ("top", 0.6),
    ("club", 0.5),
    ("gq", 0.8),
    ("ml", 0.7),
    ("tk", 0.9),
];

/// Raw weighted sum is multiplied by this before clamping to [0, 100].
pub const SCORE_SCALE: f64 = 20.0;
/// Scores strictly above this are malicious.
pub const MALICIOUS_THRESHOLD: f64 = 60.0;
/// Confidence is `score * CONFIDENCE_FACTOR`, capped at `MAX_CONFIDENCE`.
pub const CONFIDENCE_FACTOR: f64 = 0.9;
pub const MAX_CONFIDENCE: f64 = 95.0;
pub const MAX_SCORE: f64 = 100.0;

/// Looks up the risk for a (lowercase) TLD.
pub fn tld_risk(tld: &str) -> f64 {
    TLD_RISK
        .iter()
        .find(|(name, _)| *name == tld)
        .map(|(_, risk)| *risk)
        .unwrap_or(UNKNOWN_TLD_RISK)
}
