//! Bill-of-lading number finder.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extract::{ExtractionResult, NOT_FOUND};

use super::synonyms::{BOL_SYNONYMS, BOL_TEXT_FRAGMENTS};

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Locate the BOL number and reduce it to digits.
///
/// Key passes first (summary, then products); when both miss, summary VALUES
/// are scanned for the free-text lading fragments and the first digit run of
/// the matching value becomes the candidate. Whatever the candidate, every
/// non-digit character is stripped. A candidate with no digits yields an
/// empty string, which is a valid outcome distinct from `"Not Found"`.
pub fn find_bol_number(result: &ExtractionResult) -> String {
    if let Some(raw) = super::find_field(result, BOL_SYNONYMS) {
        return strip_non_digits(&raw);
    }

    for fragment in BOL_TEXT_FRAGMENTS {
        for value in result.summary.values() {
            if value.to_lowercase().contains(fragment) {
                let candidate = first_digit_run(value);
                return strip_non_digits(&candidate);
            }
        }
    }

    NOT_FOUND.to_string()
}

fn first_digit_run(value: &str) -> String {
    DIGIT_RUN
        .find(value)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result_with_summary(pairs: &[(&str, &str)]) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        for (key, value) in pairs {
            result.summary.insert(key.to_string(), value.to_string());
        }
        result
    }

    #[test]
    fn strips_non_digits_from_key_match() {
        let result = result_with_summary(&[("BOL Number", "BOL-123-456")]);
        assert_eq!(find_bol_number(&result), "123456");
    }

    #[test]
    fn digitless_match_stays_empty_not_sentinel() {
        let result = result_with_summary(&[("BOL Number", "No BOL present")]);
        assert_eq!(find_bol_number(&result), "");
    }

    #[test]
    fn falls_back_to_lading_fragment_in_values() {
        let result = result_with_summary(&[
            ("Carrier", "Acme"),
            ("Notes", "Bill of Lading # 4471 rev 2 attached"),
        ]);
        assert_eq!(find_bol_number(&result), "4471");
    }

    #[test]
    fn fragment_without_digits_yields_empty() {
        let result = result_with_summary(&[("Notes", "see bill of lading # above")]);
        assert_eq!(find_bol_number(&result), "");
    }

    #[test]
    fn no_match_yields_sentinel() {
        let result = result_with_summary(&[("Carrier", "Acme"), ("Date", "01/02")]);
        assert_eq!(find_bol_number(&result), NOT_FOUND);
    }
}
