//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the ladex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LadexConfig {
    /// Document storage configuration.
    pub storage: StorageConfig,

    /// Extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage container holding the scanned documents.
    pub bucket: String,

    /// Manifest file listing the document names to offer.
    pub manifest: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: "fp-prod-s3".to_string(),
            manifest: PathBuf::from("s3_filenames.txt"),
        }
    }
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Consume only the first expense document of a response.
    pub first_document_only: bool,

    /// Fall back to a lines-only view when no expense data is present.
    pub lines_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            first_document_only: true,
            lines_fallback: true,
        }
    }
}

impl LadexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
