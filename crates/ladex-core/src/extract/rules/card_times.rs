//! Card in/out (load start and end) time finders.

use crate::extract::{ExtractionResult, NOT_FOUND};

use super::synonyms::{CARD_IN_SYNONYMS, CARD_OUT_SYNONYMS};

/// Locate the load start time. The matched value is returned as printed.
pub fn find_card_in(result: &ExtractionResult) -> String {
    super::find_field(result, CARD_IN_SYNONYMS).unwrap_or_else(|| NOT_FOUND.to_string())
}

/// Locate the load end time. The matched value is returned as printed.
pub fn find_card_out(result: &ExtractionResult) -> String {
    super::find_field(result, CARD_OUT_SYNONYMS).unwrap_or_else(|| NOT_FOUND.to_string())
}
