// File: src/error.rs
// Purpose: Field-level validation failures and their fixed messages

use crate::fields::FieldId;
use thiserror::Error;

/// One failed check, carrying the fixed user-facing message
///
/// Every failure is local and recoverable: the user edits the offending
/// field and resubmits. Nothing here is retried or propagated past the
/// single rejection the pipeline returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Your name should be 2 words and 2 characters per word, and no numbers.")]
    InvalidName,

    #[error("This email address is not valid.")]
    InvalidEmail,

    #[error("This phone number is not a valid Finnish phone number, start the number with +358")]
    InvalidPhone,

    #[error("Please enter your birth date.")]
    MissingBirthDate,

    #[error("You need to be at least 13 years old to submit.")]
    UnderAge,

    #[error("Please accept the terms before submitting.")]
    TermsNotAccepted,
}

impl ValidationError {
    /// The form field this error attaches to
    pub fn field(&self) -> FieldId {
        match self {
            ValidationError::InvalidName => FieldId::FullName,
            ValidationError::InvalidEmail => FieldId::Email,
            ValidationError::InvalidPhone => FieldId::Phone,
            ValidationError::MissingBirthDate | ValidationError::UnderAge => FieldId::BirthDate,
            ValidationError::TermsNotAccepted => FieldId::Terms,
        }
    }
}
