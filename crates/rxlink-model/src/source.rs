//! Generated citation-source columns.

use std::fmt;

use crate::table::DrugTable;

/// The five generated columns, in the order they are appended to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceColumn {
    ActiveIngredient,
    AtcCode,
    Company,
    UsageInfo,
    DrugInfo,
}

impl SourceColumn {
    pub const ALL: [SourceColumn; 5] = [
        SourceColumn::ActiveIngredient,
        SourceColumn::AtcCode,
        SourceColumn::Company,
        SourceColumn::UsageInfo,
        SourceColumn::DrugInfo,
    ];

    /// Header name written to the output table.
    pub fn header(self) -> &'static str {
        match self {
            SourceColumn::ActiveIngredient => "Source URL - Active Ingredient",
            SourceColumn::AtcCode => "Source URL - ATC Code",
            SourceColumn::Company => "Source URL - Company",
            SourceColumn::UsageInfo => "Source URL - Usage Info",
            SourceColumn::DrugInfo => "Source URL - Drug Info",
        }
    }

    /// Human-readable name of the external reference behind the column.
    pub fn source_name(self) -> &'static str {
        match self {
            SourceColumn::ActiveIngredient => "PubChem",
            SourceColumn::AtcCode => "WHO ATC/DDD Index",
            SourceColumn::Company => "TİTCK",
            SourceColumn::UsageInfo => "PubMed Central",
            SourceColumn::DrugInfo => "FarmaLOG",
        }
    }

    pub fn headers() -> [&'static str; 5] {
        Self::ALL.map(SourceColumn::header)
    }
}

impl fmt::Display for SourceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Per-column count of records holding a non-empty generated URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCoverage {
    pub total_records: usize,
    counts: [usize; 5],
}

impl SourceCoverage {
    /// Counts non-blank values for every generated column present in `table`.
    /// A column missing from the header counts as zero.
    pub fn from_table(table: &DrugTable) -> Self {
        let mut coverage = Self {
            total_records: table.len(),
            counts: [0; 5],
        };
        for (slot, column) in SourceColumn::ALL.iter().enumerate() {
            if let Some(index) = table.column_index(column.header()) {
                coverage.counts[slot] = table.count_non_empty(index);
            }
        }
        coverage
    }

    pub fn count(&self, column: SourceColumn) -> usize {
        self.counts[column as usize]
    }

    /// Counts in column order.
    pub fn counts(&self) -> [usize; 5] {
        self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceColumn, usize)> + '_ {
        SourceColumn::ALL.into_iter().zip(self.counts)
    }
}
