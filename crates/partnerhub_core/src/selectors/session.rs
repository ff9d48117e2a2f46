//! Session identity helpers shared by the email-keyed contexts.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Canonical form of a session or record email.
///
/// Returns `None` for blank or malformed input.
pub fn normalize_email(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if EMAIL_RE.is_match(&normalized) {
        Some(normalized)
    } else {
        None
    }
}

/// Compares a stored email against an already normalized session email.
pub(crate) fn email_matches(stored: &str, normalized: &str) -> bool {
    stored.trim().to_lowercase() == normalized
}
