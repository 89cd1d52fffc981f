//! Extraction pipeline: response shaping, text cleaning, field heuristics.

pub mod clean;
pub mod normalize;
pub mod rules;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::expense::ExpenseResponse;
use self::rules::{find_bol_number, find_card_in, find_card_out};

/// Sentinel value for a field the heuristics could not locate.
pub const NOT_FOUND: &str = "Not Found";

/// Flat label → value mapping, iterated in insertion order.
///
/// Iteration order matters: the heuristic extractors take the first key that
/// matches a synonym, so the mapping must replay the order fields appeared in
/// the response. Duplicate keys keep their original position and take the
/// later value.
pub type SummaryMapping = IndexMap<String, String>;

/// Flattened view of one expense document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Summary fields, keyed by label (or type when no label was detected).
    pub summary: SummaryMapping,

    /// One mapping per retained line item, in response order.
    pub products: Vec<SummaryMapping>,
}

/// The three target fields recovered from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedResult {
    /// Digits-only bill-of-lading number, or `"Not Found"`.
    #[serde(rename = "BOL #")]
    pub bol_number: String,

    /// Load start timestamp as printed, or `"Not Found"`.
    #[serde(rename = "Card In time")]
    pub card_in: String,

    /// Load end timestamp as printed, or `"Not Found"`.
    #[serde(rename = "Card Out time")]
    pub card_out: String,
}

impl Default for ProcessedResult {
    fn default() -> Self {
        Self {
            bol_number: NOT_FOUND.to_string(),
            card_in: NOT_FOUND.to_string(),
            card_out: NOT_FOUND.to_string(),
        }
    }
}

/// Full per-document output: cleaned structure plus the processed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExtraction {
    /// Cleaned summary/products structure, kept for display and audit.
    pub result: ExtractionResult,

    /// The three extracted target fields.
    pub processed: ProcessedResult,
}

/// Run the whole pipeline over one service response with default settings.
pub fn process_response(response: &ExpenseResponse) -> DocumentExtraction {
    process_response_with(response, &ExtractionConfig::default())
}

/// Run the whole pipeline over one service response.
///
/// Normalizes the expense documents selected by the config, cleans every
/// value, then runs the three field heuristics over the cleaned structure.
/// Total over any well-typed response: an empty or document-less response
/// yields empty mappings and `"Not Found"` fields, never an error.
pub fn process_response_with(
    response: &ExpenseResponse,
    config: &ExtractionConfig,
) -> DocumentExtraction {
    let result = clean::clean_result(&normalize::normalize(response, config));

    let processed = ProcessedResult {
        bol_number: find_bol_number(&result),
        card_in: find_card_in(&result),
        card_out: find_card_out(&result),
    };

    debug!(
        bol = %processed.bol_number,
        card_in = %processed.card_in,
        card_out = %processed.card_out,
        "processed document"
    );

    DocumentExtraction { result, processed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::{Detection, ExpenseDocument, SummaryField};
    use pretty_assertions::assert_eq;

    fn summary_field(label: &str, value: &str) -> SummaryField {
        SummaryField {
            field_type: None,
            label_detection: Some(Detection::new(label)),
            value_detection: Some(Detection::new(value)),
        }
    }

    #[test]
    fn processes_document_end_to_end() {
        let response = ExpenseResponse {
            expense_documents: vec![ExpenseDocument {
                summary_fields: vec![
                    summary_field("BOL Number", "BOL# 9981-A"),
                    summary_field("Bay In", "08:15\n"),
                ],
                line_item_groups: vec![],
            }],
        };

        let extraction = process_response(&response);

        let mut expected_summary = SummaryMapping::new();
        expected_summary.insert("BOL Number".to_string(), "BOL# 9981-A".to_string());
        expected_summary.insert("Bay In".to_string(), "08:15".to_string());

        assert_eq!(extraction.result.summary, expected_summary);
        assert!(extraction.result.products.is_empty());
        assert_eq!(extraction.processed.bol_number, "9981");
        assert_eq!(extraction.processed.card_in, "08:15");
        assert_eq!(extraction.processed.card_out, NOT_FOUND);
    }

    #[test]
    fn config_widens_extraction_to_all_documents() {
        let response = ExpenseResponse {
            expense_documents: vec![
                ExpenseDocument {
                    summary_fields: vec![summary_field("Carrier", "Acme")],
                    line_item_groups: vec![],
                },
                ExpenseDocument {
                    summary_fields: vec![summary_field("BOL Number", "BOL-7001")],
                    line_item_groups: vec![],
                },
            ],
        };

        let first_only = process_response(&response);
        assert_eq!(first_only.processed.bol_number, NOT_FOUND);

        let config = ExtractionConfig {
            first_document_only: false,
            ..Default::default()
        };
        let merged = process_response_with(&response, &config);
        assert_eq!(merged.processed.bol_number, "7001");
    }

    #[test]
    fn empty_response_yields_not_found_everywhere() {
        let extraction = process_response(&ExpenseResponse::default());
        assert!(extraction.result.summary.is_empty());
        assert!(extraction.result.products.is_empty());
        assert_eq!(extraction.processed, ProcessedResult::default());
    }

    #[test]
    fn processed_result_serializes_with_display_keys() {
        let processed = ProcessedResult {
            bol_number: "9981".to_string(),
            card_in: "08:15".to_string(),
            card_out: NOT_FOUND.to_string(),
        };

        let json = serde_json::to_value(&processed).unwrap();
        assert_eq!(json["BOL #"], "9981");
        assert_eq!(json["Card In time"], "08:15");
        assert_eq!(json["Card Out time"], "Not Found");
    }
}
