use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Form catalogue ──────────────────────────────────────────────────

/// Case types accepted by the court search, as `(value, label)` pairs.
pub const CASE_TYPES: &[(&str, &str)] = &[
    ("W.P.(C)", "W.P.(C) - Writ Petition (Civil)"),
    ("CRL.A.", "CRL.A. - Criminal Appeal"),
    ("CS(OS)", "CS(OS) - Civil Suit (Original Side)"),
    ("ARB.P.", "ARB.P. - Arbitration Petition"),
    ("RFA", "RFA - Regular First Appeal"),
];

/// Oldest filing year offered in the year picker.
pub const EARLIEST_FILING_YEAR: i32 = 2000;

/// Filing years from `current_year` down to [`EARLIEST_FILING_YEAR`], newest first.
pub fn filing_years(current_year: i32) -> Vec<i32> {
    (EARLIEST_FILING_YEAR..=current_year).rev().collect()
}

/// The current calendar year in UTC.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

// ── Search values ───────────────────────────────────────────────────

/// The three fields of the case search form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseSearch {
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
}

impl CaseSearch {
    pub fn new(
        case_type: impl Into<String>,
        case_number: impl Into<String>,
        filing_year: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            case_number: case_number.into(),
            filing_year: filing_year.into(),
        }
    }

    /// Check the values before the form is allowed to submit.
    ///
    /// Missing fields are reported before a malformed case number. Only the
    /// case number is trimmed; the other two come from pickers.
    pub fn validate(&self) -> Result<(), SearchError> {
        let case_number = self.case_number.trim();

        if self.case_type.is_empty() || case_number.is_empty() || self.filing_year.is_empty() {
            return Err(SearchError::MissingFields);
        }

        if !case_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(SearchError::NonNumericCaseNumber);
        }

        Ok(())
    }

    /// Display string such as `"CRL.A. 45/2023"`.
    pub fn display(&self) -> String {
        format_case_display(&self.case_type, self.case_number.trim(), &self.filing_year)
    }
}

/// Strip every character that is not an ASCII digit.
///
/// Applied to the case number field on every keystroke.
pub fn sanitize_case_number(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Compose `"{type} {number}/{year}"`.
pub fn format_case_display(case_type: &str, case_number: &str, filing_year: &str) -> String {
    format!("{case_type} {case_number}/{filing_year}")
}

// ── Validation errors ───────────────────────────────────────────────

/// Why a search submission was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchError {
    MissingFields,
    NonNumericCaseNumber,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MissingFields => write!(f, "Please fill in all required fields."),
            SearchError::NonNumericCaseNumber => {
                write!(f, "Case number should contain only numbers.")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CaseSearch {
        CaseSearch::new("CRL.A.", "45", "2023")
    }

    #[test]
    fn complete_numeric_search_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn each_missing_field_is_rejected() {
        let mut s = filled();
        s.case_type.clear();
        assert_eq!(s.validate(), Err(SearchError::MissingFields));

        let mut s = filled();
        s.case_number.clear();
        assert_eq!(s.validate(), Err(SearchError::MissingFields));

        let mut s = filled();
        s.filing_year.clear();
        assert_eq!(s.validate(), Err(SearchError::MissingFields));
    }

    #[test]
    fn whitespace_only_case_number_counts_as_missing() {
        let s = CaseSearch::new("RFA", "   ", "2020");
        assert_eq!(s.validate(), Err(SearchError::MissingFields));
    }

    #[test]
    fn missing_fields_take_priority_over_bad_number() {
        let s = CaseSearch::new("", "12a", "2020");
        assert_eq!(s.validate(), Err(SearchError::MissingFields));
    }

    #[test]
    fn non_digit_case_number_is_rejected() {
        for number in ["12a3", "-5", "4.5", "1 2", "١٢"] {
            let s = CaseSearch::new("RFA", number, "2020");
            assert_eq!(s.validate(), Err(SearchError::NonNumericCaseNumber), "{number}");
        }
    }

    #[test]
    fn surrounding_whitespace_on_case_number_is_ignored() {
        let s = CaseSearch::new("RFA", " 123 ", "2020");
        assert_eq!(s.validate(), Ok(()));
        assert_eq!(s.display(), "RFA 123/2020");
    }

    #[test]
    fn sanitize_strips_non_digits() {
        assert_eq!(sanitize_case_number("12a3b"), "123");
        assert_eq!(sanitize_case_number("abc"), "");
        assert_eq!(sanitize_case_number(" 4-5/6 "), "456");
        assert_eq!(sanitize_case_number("007"), "007");
    }

    #[test]
    fn format_display_matches_court_notation() {
        assert_eq!(format_case_display("CR", "45", "2023"), "CR 45/2023");
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            SearchError::MissingFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            SearchError::NonNumericCaseNumber.to_string(),
            "Case number should contain only numbers."
        );
    }

    #[test]
    fn filing_years_are_newest_first() {
        let years = filing_years(2003);
        assert_eq!(years, vec![2003, 2002, 2001, 2000]);
        assert!(filing_years(1999).is_empty());
    }
}
