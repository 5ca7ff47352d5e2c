//! Data model for drug product tables and their generated citation sources.
//!
//! A [`DrugTable`] is a header plus positional [`Record`]s. The four input
//! columns the link generator reads are resolved once per table through
//! [`ConsumedColumns`], and the five generated columns are enumerated by
//! [`SourceColumn`].

pub mod drug;
pub mod source;
pub mod table;

pub use drug::{
    ACTIVE_INGREDIENT_COLUMN, ATC_CODE_COLUMN, COMPANY_COLUMN, ConsumedColumns, DRUG_NAME_COLUMN,
    DrugFields,
};
pub use source::{SourceColumn, SourceCoverage};
pub use table::{DrugTable, Record};
