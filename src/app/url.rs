//! User-supplied URL hygiene.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Trims a user-supplied URL and rejects empty or overlong input.
///
/// No scheme is added: the scorer needs the URL exactly as given, since the
/// scheme itself is a feature. Syntax is left to feature extraction.
///
/// # Returns
///
/// `Some(trimmed_url)` if the URL should be scored, `None` otherwise.
pub fn normalize_input_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        warn!("Skipping empty URL");
        return None;
    }

    if trimmed.chars().count() > MAX_URL_LENGTH {
        let preview: String = trimmed.chars().take(50).collect();
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            trimmed.chars().count(),
            MAX_URL_LENGTH,
            preview
        );
        return None;
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_input_url("  https://example.com \n"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_keeps_scheme_as_given() {
        assert_eq!(
            normalize_input_url("http://example.com"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            normalize_input_url("example.com"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert_eq!(normalize_input_url(""), None);
        assert_eq!(normalize_input_url("   "), None);
    }

    #[test]
    fn test_normalize_rejects_overlong() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(normalize_input_url(&long), None);
    }

    #[test]
    fn test_normalize_multibyte_preview_does_not_panic() {
        let long = format!("https://例え.jp/{}", "ü".repeat(MAX_URL_LENGTH));
        assert_eq!(normalize_input_url(&long), None);
    }
}
