//! Narrow seams for the out-of-scope collaborators.
//!
//! The OCR/expense service and object storage stay behind these traits; the
//! pipeline itself only ever sees a decoded [`ExpenseResponse`]. Any polling
//! the real service needs to reach a terminal job state happens behind
//! [`ExpenseAnalyzer::analyze_expense`], which is invoked exactly once per
//! document and is synchronous from the caller's perspective.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AnalyzeError, ResponseError, StorageError};
use crate::models::expense::ExpenseResponse;

/// Where a document's bytes come from. Type-sniffing of user input happens
/// upstream; by the time a source reaches this crate it is already tagged.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// A document sitting in an object-storage container.
    StorageLocator { bucket: String, key: String },

    /// Bytes uploaded directly by the user.
    UploadedBytes(Vec<u8>),
}

impl DocumentSource {
    /// Display name for logs and error messages.
    pub fn name(&self) -> String {
        match self {
            Self::StorageLocator { bucket, key } => format!("{bucket}/{key}"),
            Self::UploadedBytes(bytes) => format!("<{} uploaded bytes>", bytes.len()),
        }
    }
}

/// Expense-analysis capability: submit a document, receive the structured
/// field list.
pub trait ExpenseAnalyzer {
    fn analyze_expense(&self, source: &DocumentSource) -> Result<ExpenseResponse, AnalyzeError>;
}

/// Object-storage capability: list container contents, fetch document bytes.
pub trait DocumentStore {
    fn list_documents(&self) -> Result<Vec<String>, StorageError>;
    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, StorageError>;
}

/// [`ExpenseAnalyzer`] backed by saved response JSON files.
///
/// Looks up `<key>.json` under a directory of captured service responses;
/// used by the CLI and tests in place of the cloud client.
pub struct SavedResponseAnalyzer {
    response_dir: PathBuf,
}

impl SavedResponseAnalyzer {
    pub fn new(response_dir: impl Into<PathBuf>) -> Self {
        Self {
            response_dir: response_dir.into(),
        }
    }
}

impl ExpenseAnalyzer for SavedResponseAnalyzer {
    fn analyze_expense(&self, source: &DocumentSource) -> Result<ExpenseResponse, AnalyzeError> {
        let key = match source {
            DocumentSource::StorageLocator { key, .. } => key.clone(),
            DocumentSource::UploadedBytes(_) => {
                return Err(AnalyzeError::Rejected(
                    "saved-response analyzer only serves storage locators".to_string(),
                ))
            }
        };

        let path = self.response_dir.join(format!("{key}.json"));
        if !path.exists() {
            return Err(AnalyzeError::NoResponse(key));
        }

        info!("Loading saved response for {key}");
        let content = fs::read_to_string(&path)
            .map_err(|source| ResponseError::Read { path, source })
            .map_err(AnalyzeError::Decode)?;
        let response = serde_json::from_str(&content)
            .map_err(ResponseError::Parse)
            .map_err(AnalyzeError::Decode)?;
        Ok(response)
    }
}

/// [`DocumentStore`] backed by a name manifest and a local document directory.
///
/// Stands in for the object-storage container: the manifest plays the role of
/// the container listing and documents are fetched from the directory by name.
pub struct ManifestStore {
    manifest: PathBuf,
    document_dir: PathBuf,
}

impl ManifestStore {
    pub fn new(manifest: impl Into<PathBuf>, document_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            document_dir: document_dir.into(),
        }
    }
}

impl DocumentStore for ManifestStore {
    fn list_documents(&self) -> Result<Vec<String>, StorageError> {
        read_manifest(&self.manifest)
    }

    fn fetch_document(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.document_dir.join(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        fs::read(&path).map_err(|e| StorageError::Fetch {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Read a document-name manifest, one name per line, skipping blanks.
pub fn read_manifest(path: &Path) -> Result<Vec<String>, StorageError> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn manifest_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a.jpg\n\n  \nb.jpg  ").unwrap();

        let names = read_manifest(file.path()).unwrap();
        assert_eq!(names, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn manifest_store_lists_and_fetches() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("names.txt");
        fs::write(&manifest, "doc1.jpg\n").unwrap();
        fs::write(dir.path().join("doc1.jpg"), b"bytes").unwrap();

        let store = ManifestStore::new(&manifest, dir.path());
        assert_eq!(store.list_documents().unwrap(), vec!["doc1.jpg".to_string()]);
        assert_eq!(store.fetch_document("doc1.jpg").unwrap(), b"bytes");

        let err = store.fetch_document("absent.jpg").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(name) if name == "absent.jpg"));
    }

    #[test]
    fn saved_analyzer_loads_response_by_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("doc1.jpg.json"),
            r#"{"ExpenseDocuments": []}"#,
        )
        .unwrap();

        let analyzer = SavedResponseAnalyzer::new(dir.path());
        let source = DocumentSource::StorageLocator {
            bucket: "fp-prod-s3".to_string(),
            key: "doc1.jpg".to_string(),
        };

        let response = analyzer.analyze_expense(&source).unwrap();
        assert!(response.expense_documents.is_empty());
    }

    #[test]
    fn saved_analyzer_reports_missing_response() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = SavedResponseAnalyzer::new(dir.path());
        let source = DocumentSource::StorageLocator {
            bucket: "fp-prod-s3".to_string(),
            key: "absent.jpg".to_string(),
        };

        let err = analyzer.analyze_expense(&source).unwrap_err();
        assert!(matches!(err, AnalyzeError::NoResponse(key) if key == "absent.jpg"));
    }

    #[test]
    fn saved_analyzer_rejects_uploaded_bytes() {
        let analyzer = SavedResponseAnalyzer::new("responses");
        let err = analyzer
            .analyze_expense(&DocumentSource::UploadedBytes(vec![1, 2, 3]))
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Rejected(_)));
    }
}
