//! CSV reading and writing utilities.

mod header;
mod reader;
mod writer;

pub use reader::read_drug_table;
pub use writer::write_drug_table;
