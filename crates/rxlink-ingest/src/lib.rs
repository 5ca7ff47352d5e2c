//! Drug table ingestion utilities.
//!
//! This crate loads a drug product CSV into a [`rxlink_model::DrugTable`] and
//! writes tables back out for the backup and augmented outputs.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rxlink_ingest::{read_drug_table, write_drug_table};
//!
//! let table = read_drug_table(Path::new("drugs_table_detailed.csv"))?;
//! write_drug_table(Path::new("drugs_table_detailed_backup_before_sources.csv"), &table)?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use self::csv::{read_drug_table, write_drug_table};
