//! URL feature extraction.
//!
//! Derives a fixed-shape `FeatureVector` from a URL string. Extraction is a
//! pure function of its input: no network access, no shared state.
//!
//! Two matchers are deliberately permissive:
//! - the IPv4 check is an unanchored dotted-quad pattern with no range check
//! - keywords are plain substrings, so "relogin" counts as "login"

mod entropy;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error_handling::InvalidUrlError;

pub use entropy::shannon_entropy;

/// Keywords commonly found in credential-phishing URLs.
pub const SUSPICIOUS_KEYWORDS: [&str; 12] = [
    "login", "secure", "verify", "account", "banking", "password", "update", "confirm", "billing",
    "payment", "security", "alert",
];

/// Characters counted by `special_char_count`.
pub const SPECIAL_CHARS: &str = "~!@#$%^&*()_+={}|[]:;<>?,";

static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("dotted-quad pattern is valid")
});

/// Lexical and structural summary of a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Characters in the full URL string
    pub length: usize,
    pub has_https: bool,
    /// `.` characters in the hostname
    pub num_dots: usize,
    /// `-` characters in the hostname
    pub num_hyphens: usize,
    pub has_ip: bool,
    /// Last dot-separated hostname label, ASCII-lowercased; empty when the
    /// hostname has no dot
    pub tld: String,
    pub suspicious_keyword_count: usize,
    /// Shannon entropy of the hostname in bits
    pub entropy: f64,
    /// `/` characters in the path component
    pub path_depth: usize,
    pub has_port: bool,
    pub special_char_count: usize,
}

/// Extracts the feature vector for `url`.
///
/// # Errors
///
/// Returns `InvalidUrlError` if the string does not parse as an absolute URL
/// or parses without a host.
///
/// # Examples
///
/// ```
/// use url_risk::extract;
///
/// let features = extract("https://www.google.com").unwrap();
/// assert!(features.has_https);
/// assert_eq!(features.tld, "com");
/// assert_eq!(features.num_dots, 2);
/// ```
pub fn extract(url: &str) -> Result<FeatureVector, InvalidUrlError> {
    let parsed = Url::parse(url).map_err(|source| InvalidUrlError::Parse {
        url: url.to_string(),
        source,
    })?;

    let hostname = match parsed.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => {
            return Err(InvalidUrlError::MissingHost {
                url: url.to_string(),
            })
        }
    };

    Ok(FeatureVector {
        length: url.chars().count(),
        has_https: parsed.scheme() == "https",
        num_dots: count_char(hostname, '.'),
        num_hyphens: count_char(hostname, '-'),
        has_ip: looks_like_ipv4(hostname),
        tld: top_level_label(hostname).to_ascii_lowercase(),
        suspicious_keyword_count: count_suspicious_keywords(url),
        entropy: shannon_entropy(hostname),
        path_depth: count_char(parsed.path(), '/'),
        has_port: parsed.port().is_some(),
        special_char_count: url.chars().filter(|c| SPECIAL_CHARS.contains(*c)).count(),
    })
}

/// Returns true if `hostname` contains a dotted-quad (`1.2.3.4`) pattern.
///
/// Octets are not range-checked: `999.999.999.999` matches.
pub fn looks_like_ipv4(hostname: &str) -> bool {
    DOTTED_QUAD.is_match(hostname)
}

/// Counts how many distinct keywords appear anywhere in `url`, ignoring case.
pub fn count_suspicious_keywords(url: &str) -> usize {
    let lowered = url.to_lowercase();
    SUSPICIOUS_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

/// Last dot-separated label of `hostname`, or `""` if there is no dot.
pub fn top_level_label(hostname: &str) -> &str {
    match hostname.rsplit_once('.') {
        Some((_, label)) => label,
        None => "",
    }
}

fn count_char(haystack: &str, needle: char) -> usize {
    haystack.chars().filter(|c| *c == needle).count()
}
