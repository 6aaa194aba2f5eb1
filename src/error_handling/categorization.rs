//! Failure categorization.
//!
//! Maps extraction errors onto the coarse `FailureKind` buckets used for
//! end-of-run statistics.

use super::stats::ProcessingStats;
use super::types::{FailureKind, InvalidUrlError};

/// Categorizes an `InvalidUrlError` into a `FailureKind`.
///
/// Parser errors are bucketed by the parser's own reason; URLs that parse but
/// carry no host land in `MissingHost`.
pub fn categorize_url_error(error: &InvalidUrlError) -> FailureKind {
    match error {
        InvalidUrlError::MissingHost { .. } => FailureKind::MissingHost,
        InvalidUrlError::Parse { source, .. } => match source {
            url::ParseError::RelativeUrlWithoutBase
            | url::ParseError::RelativeUrlWithCannotBeABaseBase => FailureKind::RelativeUrl,
            url::ParseError::EmptyHost => FailureKind::EmptyHost,
            url::ParseError::InvalidPort => FailureKind::InvalidPort,
            url::ParseError::InvalidIpv4Address | url::ParseError::InvalidIpv6Address => {
                FailureKind::InvalidIpAddress
            }
            url::ParseError::InvalidDomainCharacter | url::ParseError::IdnaError => {
                FailureKind::InvalidDomain
            }
            _ => FailureKind::OtherParseError,
        },
    }
}

/// Records a per-sample failure in the processing statistics.
pub fn update_failure_stats(stats: &ProcessingStats, error: &InvalidUrlError) {
    stats.increment_failure(categorize_url_error(error));
}
