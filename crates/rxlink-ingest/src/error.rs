//! Error types for drug table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or writing drug tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input CSV file not found.
    #[error("{path} not found!")]
    FileNotFound { path: PathBuf },

    /// Failed to create or write an output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Failed to read or parse a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize a CSV record.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

impl IngestError {
    /// True for the missing-input condition, which aborts before any output.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, IngestError::FileNotFound { .. })
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
            path: PathBuf::from("drugs_table_detailed.csv"),
        };
        assert_eq!(err.to_string(), "drugs_table_detailed.csv not found!");
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_empty_csv_is_not_missing_input() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("empty.csv"),
        };
        assert!(!err.is_missing_input());
    }
}
