// File: src/pipeline.rs
// Purpose: Ordered validation pipeline for form submissions

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::fields::{FieldId, FieldValues};
use crate::row::RegistrationRow;

/// Result of one validation pass
///
/// Exactly one variant per invocation: either a display-ready row or
/// the first failing field with its message.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// All checks passed; the row is ready for the timetable
    Accepted(RegistrationRow),
    /// A check failed; `message` belongs next to the control named by `field`
    Rejected { field: FieldId, message: String },
}

impl ValidationResult {
    /// Check if validation passed
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    /// Check if validation failed
    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Extract the row if validation passed
    pub fn ok(self) -> Option<RegistrationRow> {
        match self {
            ValidationResult::Accepted(row) => Some(row),
            ValidationResult::Rejected { .. } => None,
        }
    }

    /// Extract the offending field and message if validation failed
    pub fn err(self) -> Option<(FieldId, String)> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected { field, message } => Some((field, message)),
        }
    }
}

/// Execute the validation pipeline
///
/// Runs the field checks in form order (name, email, phone, birth
/// date, terms) and stops at the first failure. `now` supplies both
/// the timestamp of an accepted row and the calendar date the age
/// rules are evaluated against; the pipeline itself never reads the
/// clock, so identical input and `now` always produce the identical
/// result.
pub fn validate(values: &FieldValues, now: NaiveDateTime) -> ValidationResult {
    match values.to_registration(now.date()) {
        Ok(registration) => {
            tracing::debug!(name = %registration.full_name, "registration accepted");
            ValidationResult::Accepted(registration.to_row(now))
        }
        Err(error) => {
            let field = error.field();
            tracing::debug!(%field, %error, "registration rejected");
            ValidationResult::Rejected {
                field,
                message: error.to_string(),
            }
        }
    }
}

/// Render `now` the way the form's hidden timestamp field shows it
///
/// Unpadded day and month, zero-padded time: `6.11.2025, 17:43:12`.
pub fn format_timestamp(now: NaiveDateTime) -> String {
    format!(
        "{}.{}.{}, {:02}:{:02}:{:02}",
        now.day(),
        now.month(),
        now.year(),
        now.hour(),
        now.minute(),
        now.second()
    )
}
