//! Text cleaning for extracted values.

use super::{ExtractionResult, SummaryMapping};

/// Remove embedded newlines and carriage returns, then trim.
///
/// OCR values frequently carry line breaks from multi-line regions; the
/// downstream heuristics and display expect single-line values.
pub fn clean_text(value: &str) -> String {
    value.replace(['\n', '\r'], "").trim().to_string()
}

/// Clean every value of a mapping; keys pass through unchanged.
fn clean_mapping(mapping: &SummaryMapping) -> SummaryMapping {
    mapping
        .iter()
        .map(|(key, value)| (key.clone(), clean_text(value)))
        .collect()
}

/// Clean every string value in the result, summary and products alike.
pub fn clean_result(result: &ExtractionResult) -> ExtractionResult {
    ExtractionResult {
        summary: clean_mapping(&result.summary),
        products: result.products.iter().map(clean_mapping).collect(),
    }
}
