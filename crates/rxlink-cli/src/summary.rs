use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use rxlink_links::SourceBases;
use rxlink_model::SourceColumn;

use crate::types::RunSummary;

pub fn print_summary(result: &RunSummary) {
    println!("Input: {}", result.input.display());
    match (&result.backup, &result.output) {
        (Some(backup), Some(output)) => {
            println!("Backup: {}", backup.display());
            println!("Output: {}", output.display());
        }
        _ => println!("Dry run: no files written"),
    }
    println!("Total drugs: {}", result.coverage.total_records);
    println!("{}", coverage_table(result));
}

/// Per-column coverage, one row per generated column in table order.
pub fn coverage_table(result: &RunSummary) -> Table {
    let total = result.coverage.total_records;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Source"),
        header_cell("URLs generated"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (column, count) in result.coverage.iter() {
        table.add_row(vec![
            column_cell(column),
            Cell::new(column.source_name()),
            coverage_cell(count, total),
        ]);
    }
    table
}

pub fn print_sources(bases: &SourceBases) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Source"),
        header_cell("Base URL"),
    ]);
    apply_table_style(&mut table);
    for column in SourceColumn::ALL {
        table.add_row(vec![
            column_cell(column),
            Cell::new(column.source_name()),
            Cell::new(source_base(bases, column)),
        ]);
    }
    println!("{table}");
}

fn source_base(bases: &SourceBases, column: SourceColumn) -> &str {
    match column {
        SourceColumn::ActiveIngredient => &bases.pubchem,
        SourceColumn::AtcCode => &bases.who_atc,
        SourceColumn::Company => &bases.titck,
        SourceColumn::UsageInfo => &bases.pubmed_central,
        SourceColumn::DrugInfo => &bases.farmalog,
    }
}

fn coverage_cell(count: usize, total: usize) -> Cell {
    let label = format!("{count}/{total} drugs");
    if count == 0 {
        dim_cell(label)
    } else if count == total {
        Cell::new(label).fg(Color::Green)
    } else {
        Cell::new(label)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(32)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(16)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn column_cell(column: SourceColumn) -> Cell {
    Cell::new(column.header())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

