//! Core library for loading-dock document extraction.
//!
//! This crate provides:
//! - Data models for the expense-analysis service response shape
//! - Response shaping (summary field and line item flattening)
//! - Heuristic extraction of BOL number and card in/out times
//! - Narrow seams for the OCR service and object storage collaborators

pub mod error;
pub mod extract;
pub mod models;
pub mod source;

pub use error::{LadexError, Result};
pub use extract::{
    process_response, process_response_with, DocumentExtraction, ExtractionResult,
    ProcessedResult, SummaryMapping, NOT_FOUND,
};
pub use models::document::DocumentResponse;
pub use models::expense::ExpenseResponse;
pub use source::{
    DocumentSource, DocumentStore, ExpenseAnalyzer, ManifestStore, SavedResponseAnalyzer,
};
