//! Row driver: load, back up, extend the schema, populate, write, report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, info_span, trace, warn};

use rxlink_ingest::{read_drug_table, write_drug_table};
use rxlink_links::{SourceBases, SourceLinks};
use rxlink_model::{ConsumedColumns, DrugTable, SourceColumn, SourceCoverage};

use crate::types::RunSummary;

pub const DEFAULT_INPUT_CSV: &str = "drugs_table_detailed.csv";
pub const DEFAULT_OUTPUT_CSV: &str = "drugs_table_detailed_with_sources.csv";
pub const DEFAULT_BACKUP_CSV: &str = "drugs_table_detailed_backup_before_sources.csv";

/// Rows between progress messages during generation.
pub const PROGRESS_INTERVAL: usize = 1000;

#[derive(Debug, Clone)]
pub struct EnrichConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub backup: PathBuf,
    pub bases: SourceBases,
    pub dry_run: bool,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_CSV),
            output: PathBuf::from(DEFAULT_OUTPUT_CSV),
            backup: PathBuf::from(DEFAULT_BACKUP_CSV),
            bases: SourceBases::default(),
            dry_run: false,
        }
    }
}

/// Runs the whole enrichment pass.
///
/// A missing input file fails before the backup or output is created.
pub fn run_enrichment(config: &EnrichConfig) -> Result<RunSummary> {
    let run_span = info_span!("enrich", input = %config.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Load
    // =========================================================================
    info!(path = %config.input.display(), "reading drug table");
    let mut table = read_drug_table(&config.input)?;
    info!(drugs = table.len(), columns = table.headers().len(), "loaded drugs");

    // =========================================================================
    // Stage 2: Backup
    // =========================================================================
    let backup = if config.dry_run {
        debug!("dry run, skipping backup");
        None
    } else {
        info!(path = %config.backup.display(), "creating backup");
        write_drug_table(&config.backup, &table)?;
        info!("backup created");
        Some(config.backup.clone())
    };

    // =========================================================================
    // Stage 3-4: Schema-extend and populate
    // =========================================================================
    let source_columns = extend_schema(&mut table);
    info!("generating source urls");
    populate_sources(&mut table, &source_columns, &config.bases);

    // =========================================================================
    // Stage 5: Emit
    // =========================================================================
    let output = if config.dry_run {
        debug!("dry run, skipping output");
        None
    } else {
        info!(path = %config.output.display(), "writing updated csv");
        write_drug_table(&config.output, &table)?;
        Some(config.output.clone())
    };

    // =========================================================================
    // Stage 6: Report
    // =========================================================================
    let coverage = SourceCoverage::from_table(&table);
    info!(
        drugs = coverage.total_records,
        duration_ms = start.elapsed().as_millis(),
        "source urls generated"
    );

    Ok(RunSummary {
        input: config.input.clone(),
        backup,
        output,
        coverage,
    })
}

/// Appends the generated columns that are not already present.
///
/// Returns their indices in [`SourceColumn`] order.
pub fn extend_schema(table: &mut DrugTable) -> [usize; 5] {
    let indices = table.ensure_columns(&SourceColumn::headers());
    let mut columns = [0usize; 5];
    columns.copy_from_slice(&indices);
    columns
}

/// Computes and stores the five links for every record.
pub fn populate_sources(table: &mut DrugTable, source_columns: &[usize; 5], bases: &SourceBases) {
    let consumed = ConsumedColumns::resolve(table);
    let missing = consumed.missing();
    if !missing.is_empty() {
        warn!(columns = ?missing, "consumed columns missing, treating as empty");
    }

    let total = table.len();
    for row in 0..total {
        if (row + 1) % PROGRESS_INTERVAL == 0 {
            info!(processed = row + 1, total, "processed drugs");
        }
        let fields = consumed.fields(&table.records()[row]);
        let links = SourceLinks::generate(bases, &fields);
        trace!(row, drug = %fields.drug_name, ?links, "generated links");
        for (column, value) in source_columns.iter().zip(links.into_values()) {
            table.set_value(row, *column, value);
        }
    }
}
