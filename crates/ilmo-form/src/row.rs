// File: src/row.rs
// Purpose: Display-ready table row for accepted registrations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkbox glyph shown in the registrations table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermsMark {
    #[serde(rename = "✅")]
    Checked,
    #[serde(rename = "❌")]
    Unchecked,
}

impl TermsMark {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermsMark::Checked => "✅",
            TermsMark::Unchecked => "❌",
        }
    }
}

impl From<bool> for TermsMark {
    fn from(checked: bool) -> Self {
        if checked {
            TermsMark::Checked
        } else {
            TermsMark::Unchecked
        }
    }
}

impl fmt::Display for TermsMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted registration, formatted for the timetable
///
/// All six values are ready for display: the output adapter renders
/// them as table cells without further formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRow {
    /// Submission time, e.g. `6.11.2025, 17:43:12`
    pub timestamp: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Zero-padded `DD.MM.YYYY`
    pub birth_date_display: String,
    pub terms_mark: TermsMark,
}

impl RegistrationRow {
    /// The six table cells in display order
    pub fn cells(&self) -> [String; 6] {
        [
            self.timestamp.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.birth_date_display.clone(),
            self.terms_mark.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> RegistrationRow {
        RegistrationRow {
            timestamp: "6.11.2025, 17:43:12".to_string(),
            full_name: "Anna Virtanen".to_string(),
            email: "anna@example.com".to_string(),
            phone: "+358 40 1234567".to_string(),
            birth_date_display: "06.11.2005".to_string(),
            terms_mark: TermsMark::Checked,
        }
    }

    #[test]
    fn test_terms_mark_glyphs() {
        assert_eq!(TermsMark::Checked.to_string(), "✅");
        assert_eq!(TermsMark::Unchecked.to_string(), "❌");
        assert_eq!(TermsMark::from(true), TermsMark::Checked);
        assert_eq!(TermsMark::from(false), TermsMark::Unchecked);
    }

    #[test]
    fn test_cells_order_matches_table_columns() {
        let cells = sample_row().cells();
        assert_eq!(
            cells,
            [
                "6.11.2025, 17:43:12",
                "Anna Virtanen",
                "anna@example.com",
                "+358 40 1234567",
                "06.11.2005",
                "✅",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn test_serde_uses_adapter_names_and_glyphs() {
        let json = serde_json::to_value(sample_row()).unwrap();
        assert_eq!(json["birthDateDisplay"], "06.11.2005");
        assert_eq!(json["termsMark"], "✅");
    }
}
