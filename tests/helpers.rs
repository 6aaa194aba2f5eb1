// Shared test helpers for building datasets with known outcomes.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use url_risk::Sample;

/// Scores as safe: https, well-known TLD, few special characters.
pub const SAFE_URL: &str = "https://www.google.com";

/// Scores 100: risky TLD, hyphens and two suspicious keywords.
pub const DANGEROUS_URL: &str = "http://bank-secure-login123.tk";

/// Rejected by feature extraction (no scheme).
pub const INVALID_URL: &str = "not a url";

/// One correct genuine sample, one correct malicious sample and one failure.
#[allow(dead_code)] // Used by other test files
pub fn mixed_dataset() -> Vec<Sample> {
    vec![
        Sample::genuine(SAFE_URL.to_string()),
        Sample::malicious(DANGEROUS_URL.to_string()),
        Sample::genuine(INVALID_URL.to_string()),
    ]
}
