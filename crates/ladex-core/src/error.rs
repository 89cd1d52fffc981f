//! Error types for the ladex-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the ladex library.
#[derive(Error, Debug)]
pub enum LadexError {
    /// Expense response decoding error.
    #[error("response error: {0}")]
    Response(#[from] ResponseError),

    /// Document storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Expense analysis error.
    #[error("analysis error: {0}")]
    Analyze(#[from] AnalyzeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to decoding a saved service response.
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The payload is not valid JSON or does not have the response shape.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response file could not be read.
    #[error("failed to read response file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors related to listing/fetching documents from storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The document manifest could not be read.
    #[error("failed to read manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The named document does not exist in the store.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The document bytes could not be fetched.
    #[error("failed to fetch document {name}: {reason}")]
    Fetch { name: String, reason: String },
}

/// Errors surfaced by the expense-analysis seam.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The analysis service rejected the document.
    #[error("analysis rejected document: {0}")]
    Rejected(String),

    /// No saved response is available for the named document.
    #[error("no saved response for document: {0}")]
    NoResponse(String),

    /// The returned payload could not be decoded.
    #[error("undecodable analysis response: {0}")]
    Decode(#[from] ResponseError),
}

/// Result type for the ladex library.
pub type Result<T> = std::result::Result<T, LadexError>;
