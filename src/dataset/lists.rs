//! Fixed vocabularies for synthetic URL generation.

pub const GENUINE_DOMAINS: [&str; 16] = [
    "google.com",
    "github.com",
    "stackoverflow.com",
    "wikipedia.org",
    "microsoft.com",
    "apple.com",
    "amazon.com",
    "facebook.com",
    "youtube.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "reddit.com",
    "netflix.com",
    "paypal.com",
    "spotify.com",
];

/// The empty path produces a bare homepage URL with no resource suffix.
pub const GENUINE_PATHS: [&str; 12] = [
    "",
    "/search",
    "/users",
    "/products",
    "/articles",
    "/download",
    "/help",
    "/support",
    "/blog",
    "/news",
    "/features",
    "/pricing",
];

pub const MALICIOUS_SERVICES: [&str; 10] = [
    "bank",
    "paypal",
    "facebook",
    "amazon",
    "microsoft",
    "apple",
    "whatsapp",
    "instagram",
    "twitter",
    "netflix",
];

pub const MALICIOUS_PATTERNS: [&str; 8] = [
    "secure-login",
    "password-reset",
    "account-verify",
    "security-update",
    "verification-code",
    "billing-alert",
    "payment-confirm",
    "login-secure",
];

/// Includes the leading dot.
pub const MALICIOUS_TLDS: [&str; 8] = [".xyz", ".top", ".club", ".gq", ".ml", ".tk", ".cf", ".ga"];
