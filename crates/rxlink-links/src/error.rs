//! Error types for source configuration loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinkError {
    /// Sources config file could not be read.
    #[error("failed to read sources config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sources config file is not a valid JSON object of base URLs.
    #[error("invalid sources config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LinkError>;
