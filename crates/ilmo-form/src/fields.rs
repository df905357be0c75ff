// File: src/fields.rs
// Purpose: Raw submission record and field identifiers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifies one input of the registration form
///
/// `Display` and the serde form yield the form-control names, so an
/// output adapter can address the control a rejection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    BirthDate,
    Terms,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::BirthDate => "birthDate",
            FieldId::Terms => "terms",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission attempt, exactly as read from the form controls
///
/// Text fields are raw strings (the pipeline trims them), the birth
/// date is the ISO `YYYY-MM-DD` string a date control submits, and the
/// checkbox is already a boolean. Constructed fresh per attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    #[serde(default)]
    pub terms_accepted: bool,
}

impl FieldValues {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        birth_date: impl Into<String>,
        terms_accepted: bool,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
            birth_date: birth_date.into(),
            terms_accepted,
        }
    }

    /// Build from the flat string map a form submission arrives as
    ///
    /// Missing keys become empty values. The checkbox follows HTML
    /// semantics: present with value `on` (or `true`) when checked,
    /// absent otherwise.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Self {
            full_name: get("fullName"),
            email: get("email"),
            phone: get("phone"),
            birth_date: get("birthDate"),
            terms_accepted: fields
                .get("terms")
                .map(|value| value == "on" || value == "true")
                .unwrap_or(false),
        }
    }
}
