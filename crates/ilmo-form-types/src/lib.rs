//! Validated field types for ilmo registration forms
//!
//! Newtype wrappers built with the `nutype` crate: each type enforces
//! its field's rule at construction, so a populated record can only
//! hold values the form would accept.
//!
//! # Types
//!
//! - `FullName` - at least two words of two or more letters
//! - `EmailAddress` - `local@domain.tld` shape
//! - `PhoneNumber` - Finnish number with the `+358` prefix
//! - `BirthDate` - calendar date with age queries against a supplied "today"
//!
//! The date rules (future date, minimum age) are deliberately NOT part
//! of `BirthDate` construction: they depend on the current date, which
//! the validation pipeline receives as a parameter.

use chrono::{Datelike, NaiveDate};
use ilmo_validation::{is_valid_email, is_valid_finnish_phone, is_valid_full_name};
use nutype::nutype;
use serde::{Deserialize, Serialize};

// =============================================================================
// String Field Types
// =============================================================================

/// Registrant's full name
///
/// At least two whitespace-separated words, every word two or more
/// letters (Scandinavian diacritics included), no digits or
/// punctuation. Input is trimmed before validation.
#[nutype(
    sanitize(trim),
    validate(predicate = is_valid_full_name),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FullName(String);

/// Email address
///
/// Non-whitespace local part and domain separated by a single `@`, with
/// at least one dot in the domain.
#[nutype(
    sanitize(trim),
    validate(predicate = is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Finnish phone number
///
/// The literal `+358` country prefix followed by at least six digits,
/// spaces, or hyphens.
#[nutype(
    sanitize(trim),
    validate(predicate = is_valid_finnish_phone),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);

// =============================================================================
// Birth Date
// =============================================================================

/// Registrant's birth date
///
/// Wraps a calendar date parsed from the ISO `YYYY-MM-DD` string a date
/// control submits. Age and future-date queries take "today" as a
/// parameter so callers stay in charge of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse from the raw ISO string; `None` for empty or malformed input.
    pub fn parse(raw: &str) -> Option<Self> {
        ilmo_validation::parse_birth_date(raw).map(Self)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// True when the birth date lies strictly after `today`.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.0 > today
    }

    /// Full elapsed years as of `today` (birthday-passed-or-is-today rule).
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        ilmo_validation::age_on(self.0, today)
    }

    /// Zero-padded Finnish display form, `DD.MM.YYYY`.
    pub fn to_finnish(&self) -> String {
        format!("{:02}.{:02}.{}", self.0.day(), self.0.month(), self.0.year())
    }
}

// =============================================================================
// Tests
// =============================================================================
