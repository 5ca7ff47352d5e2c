//! CSV writing for backup and augmented tables.

use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use rxlink_model::DrugTable;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Writes `table` to `path`, header first, one line per record.
///
/// Fields are quoted only when needed and lines end with CRLF.
pub fn write_drug_table(path: &Path, table: &DrugTable) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_path(path)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer
        .write_record(table.headers())
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    for record in table.records() {
        writer
            .write_record(record.values())
            .map_err(|e| IngestError::CsvWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "csv written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxlink_model::Record;

    #[test]
    fn test_write_quotes_only_when_needed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = DrugTable::from_parts(
            vec!["Drug Name".to_string(), "Note".to_string()],
            vec![Record::new(vec![
                "Parol".to_string(),
                "500 mg, tablet".to_string(),
            ])],
        );

        write_drug_table(&path, &table).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Drug Name,Note\r\nParol,\"500 mg, tablet\"\r\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let table = DrugTable::new(vec!["Drug Name".to_string()]);

        let result = write_drug_table(&path, &table);
        assert!(matches!(result, Err(IngestError::CsvWrite { .. })));
    }
}
