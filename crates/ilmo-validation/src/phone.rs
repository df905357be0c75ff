// File: src/phone.rs
// Purpose: Finnish phone number check

use once_cell::sync::Lazy;
use regex::Regex;

// +358 country prefix followed by at least six digits, spaces, or
// hyphens
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+358[\d\s-]{6,}$").unwrap());

/// Validate a Finnish phone number
///
/// The number must start with the literal `+358` country prefix. The
/// rest may mix digits, spaces, and hyphens freely but must be at least
/// six characters long.
pub fn is_valid_finnish_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
