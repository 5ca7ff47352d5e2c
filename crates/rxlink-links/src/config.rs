//! Loading source base URLs from a JSON file.

use std::path::Path;

use tracing::debug;

use crate::error::{LinkError, Result};
use crate::sources::SourceBases;

/// Reads a JSON object of base URLs. Omitted keys keep their defaults.
///
/// ```json
/// { "farmalog": "https://farmalog.example.org" }
/// ```
pub fn load_source_bases(path: &Path) -> Result<SourceBases> {
    let contents = std::fs::read_to_string(path).map_err(|e| LinkError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let bases: SourceBases =
        serde_json::from_str(&contents).map_err(|e| LinkError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(path = %path.display(), ?bases, "loaded source bases");
    Ok(bases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{FARMALOG_BASE, PUBCHEM_BASE};

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");
        std::fs::write(&path, r#"{ "farmalog": "https://farmalog.example.org" }"#).unwrap();

        let bases = load_source_bases(&path).unwrap();
        assert_eq!(bases.farmalog, "https://farmalog.example.org");
        assert_eq!(bases.pubchem, PUBCHEM_BASE);
        assert_ne!(bases.farmalog, FARMALOG_BASE);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");
        std::fs::write(&path, r#"{ "drugbank": "https://example.org" }"#).unwrap();

        let result = load_source_bases(&path);
        assert!(matches!(result, Err(LinkError::ConfigParse { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_source_bases(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(LinkError::ConfigRead { .. })));
    }
}
