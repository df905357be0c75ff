// File: src/email.rs
// Purpose: Email format check

use once_cell::sync::Lazy;
use regex::Regex;

// Non-whitespace, non-@ local part and domain, at least one dot in the
// domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
