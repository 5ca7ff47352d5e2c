//! CSV loading into a [`DrugTable`].

use std::path::Path;

use csv::ReaderBuilder;
use rxlink_model::{DrugTable, Record};
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::normalize_header;

/// Reads a comma-delimited, UTF-8 CSV with a single header row.
///
/// The missing-file check runs first so callers can abort before creating
/// any output. Cell values are kept verbatim; records are padded or
/// truncated to the header width.
pub fn read_drug_table(path: &Path) -> Result<DrugTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .enumerate()
        .map(|(idx, value)| normalize_header(idx, value))
        .collect();

    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut table = DrugTable::new(headers);
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let values: Vec<String> = record.iter().map(str::to_string).collect();
        if values.len() != table.headers().len() {
            debug!(
                path = %path.display(),
                line = ?record.position().map(csv::Position::line),
                fields = values.len(),
                columns = table.headers().len(),
                "record width differs from header"
            );
        }
        table.push_record(Record::new(values));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_single_header() {
        let file = create_temp_csv("Drug Name,ATC Code\nParol,N02BE01\nAugmentin,J01CR02\n");
        let table = read_drug_table(file.path()).unwrap();

        assert_eq!(table.headers(), ["Drug Name", "ATC Code"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].values(), ["Augmentin", "J01CR02"]);
    }

    #[test]
    fn test_read_keeps_cell_whitespace() {
        let file = create_temp_csv("Drug Name\n\"  Parol 500 mg \"\n");
        let table = read_drug_table(file.path()).unwrap();

        assert_eq!(table.records()[0].get(0), "  Parol 500 mg ");
    }

    #[test]
    fn test_read_with_bom() {
        let file = create_temp_csv("\u{feff}Drug Name,ATC Code\nParol,N02BE01\n");
        let table = read_drug_table(file.path()).unwrap();

        assert_eq!(table.column_index("Drug Name"), Some(0));
    }

    #[test]
    fn test_read_ragged_rows() {
        let file = create_temp_csv("A,B,C\n1\n1,2,3,4\n");
        let table = read_drug_table(file.path()).unwrap();

        assert_eq!(table.records()[0].values(), ["1", "", ""]);
        assert_eq!(table.records()[1].values(), ["1", "2", "3"]);
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_temp_csv("");
        let result = read_drug_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_drug_table(&dir.path().join("absent.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
