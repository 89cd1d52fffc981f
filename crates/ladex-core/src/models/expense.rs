//! Expense-analysis response models.
//!
//! Mirror of the cloud service's `AnalyzeExpense` response, reduced to the
//! pieces the extraction pipeline consumes. Every container defaults to empty
//! so a sparse or truncated payload still deserializes.

use serde::{Deserialize, Serialize};

/// Top-level response for one analyzed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseResponse {
    /// Detected expense documents; only the first is ever consumed.
    #[serde(rename = "ExpenseDocuments", default)]
    pub expense_documents: Vec<ExpenseDocument>,
}

/// One detected expense document within a response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseDocument {
    /// Labeled scalar values found on the document.
    #[serde(rename = "SummaryFields", default)]
    pub summary_fields: Vec<SummaryField>,

    /// Detected table/list rows, grouped.
    #[serde(rename = "LineItemGroups", default)]
    pub line_item_groups: Vec<LineItemGroup>,
}

/// A single labeled field.
///
/// The effective key is the detected label text when non-empty, else the
/// normalized type text; a field with neither is dropped by the normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryField {
    /// Normalized field type assigned by the service.
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<Detection>,

    /// Label text as printed on the document.
    #[serde(
        rename = "LabelDetection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub label_detection: Option<Detection>,

    /// Detected value text.
    #[serde(
        rename = "ValueDetection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub value_detection: Option<Detection>,
}

impl SummaryField {
    /// Effective key: label text if non-empty, else type text.
    pub fn key(&self) -> &str {
        let label = detection_text(&self.label_detection);
        if !label.is_empty() {
            label
        } else {
            detection_text(&self.field_type)
        }
    }

    /// Detected value text, empty if absent.
    pub fn value(&self) -> &str {
        detection_text(&self.value_detection)
    }
}

fn detection_text(detection: &Option<Detection>) -> &str {
    detection.as_ref().map(|d| d.text.as_str()).unwrap_or("")
}

/// A detected text span.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Detection {
    /// Raw detected text.
    #[serde(rename = "Text", default)]
    pub text: String,
}

impl Detection {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A group of related line items (one detected table).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItemGroup {
    #[serde(rename = "LineItems", default)]
    pub line_items: Vec<LineItem>,
}

/// One detected table row, itself a set of labeled values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "LineItemExpenseFields", default)]
    pub expense_fields: Vec<SummaryField>,
}
