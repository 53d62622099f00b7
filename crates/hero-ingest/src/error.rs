//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a hero dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Dataset file not found.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === JSON Errors ===
    /// Input is not valid JSON.
    #[error("failed to parse JSON {origin}: {source}")]
    JsonParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an array of records.
    #[error("expected a JSON array of records in {origin}, found {found}")]
    NotAnArray { origin: String, found: &'static str },

    // === CSV Errors ===
    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column not found in a CSV header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::CsvParse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/newHeroes.json"),
        };
        assert_eq!(err.to_string(), "dataset file not found: /data/newHeroes.json");

        let err = IngestError::NotAnArray {
            origin: "input".to_string(),
            found: "object",
        };
        assert_eq!(
            err.to_string(),
            "expected a JSON array of records in input, found object"
        );
    }
}
