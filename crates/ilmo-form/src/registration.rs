// File: src/registration.rs
// Purpose: Construction-validated registration record

use chrono::{NaiveDate, NaiveDateTime};
use ilmo_form_types::{BirthDate, EmailAddress, FullName, PhoneNumber};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::fields::FieldValues;
use crate::pipeline::format_timestamp;
use crate::row::{RegistrationRow, TermsMark};

/// A registration whose fields passed every check
///
/// Each field is validated at construction, so holding a value of this
/// type means the whole record was acceptable against the `today` it
/// was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub birth_date: BirthDate,
    pub terms_accepted: bool,
}

impl Registration {
    /// Youngest age the form accepts, in full elapsed years.
    pub const MINIMUM_AGE: i32 = 13;

    /// Format for the timetable, stamping the row with `now`.
    pub fn to_row(&self, now: NaiveDateTime) -> RegistrationRow {
        RegistrationRow {
            timestamp: format_timestamp(now),
            full_name: self.full_name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            birth_date_display: self.birth_date.to_finnish(),
            terms_mark: TermsMark::from(self.terms_accepted),
        }
    }
}

impl FieldValues {
    /// Run the field checks in form order and build the typed record
    ///
    /// The first failing check wins; later fields are not examined.
    /// `today` is the calendar date the future-date and minimum-age
    /// rules are evaluated against.
    pub fn to_registration(&self, today: NaiveDate) -> Result<Registration, ValidationError> {
        let full_name = FullName::try_new(self.full_name.clone())
            .map_err(|_| ValidationError::InvalidName)?;
        let email =
            EmailAddress::try_new(self.email.clone()).map_err(|_| ValidationError::InvalidEmail)?;
        let phone =
            PhoneNumber::try_new(self.phone.clone()).map_err(|_| ValidationError::InvalidPhone)?;

        let birth_date =
            BirthDate::parse(&self.birth_date).ok_or(ValidationError::MissingBirthDate)?;
        if birth_date.is_future(today) || birth_date.age_on(today) < Registration::MINIMUM_AGE {
            return Err(ValidationError::UnderAge);
        }

        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(Registration {
            full_name,
            email,
            phone,
            birth_date,
            terms_accepted: true,
        })
    }
}
