//! Response shaping: flatten the nested service response into mappings.

use tracing::info;

use crate::models::config::ExtractionConfig;
use crate::models::expense::{ExpenseDocument, ExpenseResponse};

use super::{ExtractionResult, SummaryMapping};

/// Flatten the selected expense documents' summary fields into a mapping.
///
/// The key is the detected label, falling back to the normalized type; fields
/// with neither are dropped. A later field sharing a key overwrites the
/// earlier value (the key keeps its original position). With
/// `first_document_only` set (the default) only the first expense document is
/// consumed; otherwise documents merge in order, later documents overwriting.
/// A response with no expense documents yields an empty mapping.
pub fn extract_summary_fields(
    response: &ExpenseResponse,
    config: &ExtractionConfig,
) -> SummaryMapping {
    let mut extracted = SummaryMapping::new();

    for document in documents(response, config) {
        for field in &document.summary_fields {
            let key = field.key();
            if !key.is_empty() {
                extracted.insert(key.to_string(), field.value().to_string());
            }
        }
    }

    info!("Extracted {} summary fields.", extracted.len());
    extracted
}

/// Flatten the selected expense documents' line items into per-item mappings.
///
/// Each retained item maps type text → value text for the pairs where both
/// are non-empty; items that yield no pairs are dropped. Order mirrors the
/// response's document/group/item order.
pub fn extract_line_items(
    response: &ExpenseResponse,
    config: &ExtractionConfig,
) -> Vec<SummaryMapping> {
    let mut products = Vec::new();

    for document in documents(response, config) {
        for group in &document.line_item_groups {
            for item in &group.line_items {
                let mut product = SummaryMapping::new();
                for field in &item.expense_fields {
                    let key = field.key();
                    let value = field.value().trim();
                    if !key.is_empty() && !value.is_empty() {
                        product.insert(key.to_string(), value.to_string());
                    }
                }
                if !product.is_empty() {
                    products.push(product);
                }
            }
        }
    }

    info!("Extracted {} line items.", products.len());
    products
}

/// Bundle both flattening passes into one result.
pub fn normalize(response: &ExpenseResponse, config: &ExtractionConfig) -> ExtractionResult {
    ExtractionResult {
        summary: extract_summary_fields(response, config),
        products: extract_line_items(response, config),
    }
}

fn documents<'a>(
    response: &'a ExpenseResponse,
    config: &ExtractionConfig,
) -> impl Iterator<Item = &'a ExpenseDocument> {
    let take = if config.first_document_only {
        1
    } else {
        response.expense_documents.len()
    };
    response.expense_documents.iter().take(take)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::{Detection, LineItem, LineItemGroup, SummaryField};
    use pretty_assertions::assert_eq;

    fn field(label: Option<&str>, field_type: Option<&str>, value: &str) -> SummaryField {
        SummaryField {
            field_type: field_type.map(Detection::new),
            label_detection: label.map(Detection::new),
            value_detection: Some(Detection::new(value)),
        }
    }

    fn single_document(
        summary_fields: Vec<SummaryField>,
        line_item_groups: Vec<LineItemGroup>,
    ) -> ExpenseResponse {
        ExpenseResponse {
            expense_documents: vec![ExpenseDocument {
                summary_fields,
                line_item_groups,
            }],
        }
    }

    fn two_documents() -> ExpenseResponse {
        ExpenseResponse {
            expense_documents: vec![
                ExpenseDocument {
                    summary_fields: vec![field(Some("Carrier"), None, "Acme")],
                    line_item_groups: vec![],
                },
                ExpenseDocument {
                    summary_fields: vec![
                        field(Some("Carrier"), None, "Other"),
                        field(Some("Bay In"), None, "08:15"),
                    ],
                    line_item_groups: vec![],
                },
            ],
        }
    }

    #[test]
    fn label_wins_over_type() {
        let response = single_document(
            vec![
                field(Some("Shipper"), Some("VENDOR_NAME"), "Acme Freight"),
                field(None, Some("TOTAL"), "100.00"),
                field(Some(""), Some(""), "orphan"),
            ],
            vec![],
        );

        let summary = extract_summary_fields(&response, &ExtractionConfig::default());
        assert_eq!(summary.get("Shipper").unwrap(), "Acme Freight");
        assert_eq!(summary.get("TOTAL").unwrap(), "100.00");
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn duplicate_key_takes_later_value_keeps_position() {
        let response = single_document(
            vec![
                field(Some("Date"), None, "01/02"),
                field(Some("Carrier"), None, "Acme"),
                field(Some("Date"), None, "03/04"),
            ],
            vec![],
        );

        let summary = extract_summary_fields(&response, &ExtractionConfig::default());
        let keys: Vec<&String> = summary.keys().collect();
        assert_eq!(keys, vec!["Date", "Carrier"]);
        assert_eq!(summary.get("Date").unwrap(), "03/04");
    }

    #[test]
    fn line_items_drop_empty_pairs_and_empty_items() {
        let response = single_document(
            vec![],
            vec![LineItemGroup {
                line_items: vec![
                    LineItem {
                        expense_fields: vec![
                            field(None, Some("ITEM"), "Diesel"),
                            field(None, Some("PRICE"), "  "),
                            field(None, Some(""), "orphan value"),
                        ],
                    },
                    LineItem {
                        expense_fields: vec![field(None, Some("ITEM"), "")],
                    },
                ],
            }],
        );

        let products = extract_line_items(&response, &ExtractionConfig::default());
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].get("ITEM").unwrap(), "Diesel");
        assert_eq!(products[0].len(), 1);
    }

    #[test]
    fn only_first_document_is_consumed_by_default() {
        let summary = extract_summary_fields(&two_documents(), &ExtractionConfig::default());
        assert_eq!(summary.get("Carrier").unwrap(), "Acme");
        assert_eq!(summary.get("Bay In"), None);
    }

    #[test]
    fn all_documents_merge_when_configured() {
        let config = ExtractionConfig {
            first_document_only: false,
            ..Default::default()
        };

        let summary = extract_summary_fields(&two_documents(), &config);
        assert_eq!(summary.get("Carrier").unwrap(), "Other");
        assert_eq!(summary.get("Bay In").unwrap(), "08:15");
    }

    #[test]
    fn empty_response_degrades_to_empty_result() {
        let result = normalize(&ExpenseResponse::default(), &ExtractionConfig::default());
        assert!(result.summary.is_empty());
        assert!(result.products.is_empty());
    }
}
