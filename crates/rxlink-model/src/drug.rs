//! Input columns consumed by the link generator.

use crate::table::{DrugTable, Record};

pub const DRUG_NAME_COLUMN: &str = "Drug Name";
pub const ACTIVE_INGREDIENT_COLUMN: &str = "Active Ingredient";
pub const ATC_CODE_COLUMN: &str = "ATC Code";
pub const COMPANY_COLUMN: &str = "Pharmaceutical Company";

/// Header positions of the consumed input columns, resolved once per table.
///
/// A column missing from the header resolves to `None`, and every record then
/// reads it as `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumedColumns {
    pub drug_name: Option<usize>,
    pub active_ingredient: Option<usize>,
    pub atc_code: Option<usize>,
    pub company: Option<usize>,
}

impl ConsumedColumns {
    pub fn resolve(table: &DrugTable) -> Self {
        Self {
            drug_name: table.column_index(DRUG_NAME_COLUMN),
            active_ingredient: table.column_index(ACTIVE_INGREDIENT_COLUMN),
            atc_code: table.column_index(ATC_CODE_COLUMN),
            company: table.column_index(COMPANY_COLUMN),
        }
    }

    /// Names of consumed columns absent from the header.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.drug_name, DRUG_NAME_COLUMN),
            (self.active_ingredient, ACTIVE_INGREDIENT_COLUMN),
            (self.atc_code, ATC_CODE_COLUMN),
            (self.company, COMPANY_COLUMN),
        ]
        .into_iter()
        .filter_map(|(index, name)| index.is_none().then_some(name))
        .collect()
    }

    pub fn fields(&self, record: &Record) -> DrugFields {
        let read = |index: Option<usize>| {
            index
                .map(|index| record.get(index).trim().to_string())
                .unwrap_or_default()
        };
        DrugFields {
            drug_name: read(self.drug_name),
            active_ingredient: read(self.active_ingredient),
            atc_code: read(self.atc_code),
            company: read(self.company),
        }
    }
}

/// Trimmed consumed values of one record. Absent columns are `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrugFields {
    pub drug_name: String,
    pub active_ingredient: String,
    pub atc_code: String,
    /// Read but not used by any link builder.
    pub company: String,
}
