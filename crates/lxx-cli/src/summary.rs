use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lxx_model::Classification;

use crate::types::CheckResult;

const CLASSIFICATION_ORDER: [Classification; 5] = [
    Classification::Resolved,
    Classification::AcceptedVariation,
    Classification::LegitimateVariation,
    Classification::LikelyTypo,
    Classification::Unexplained,
];

pub fn print_summary(result: &CheckResult) {
    println!("Source: {}", result.source.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!(
        "Scanned {} tokens ({} outside verse context), {} missing",
        result.scanned_tokens,
        result.unlocated_tokens,
        result.rows.len()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Classification"),
        header_cell("Count"),
        header_cell("Names"),
        header_cell("Numbers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total = 0usize;
    for classification in CLASSIFICATION_ORDER {
        let rows = result
            .rows
            .iter()
            .filter(|row| row.outcome.classification == classification);
        let (mut count, mut names, mut numbers) = (0usize, 0usize, 0usize);
        for row in rows {
            count += 1;
            names += usize::from(row.outcome.is_name);
            numbers += usize::from(row.outcome.is_number);
        }
        total += count;
        table.add_row(vec![
            classification_cell(classification),
            count_cell(count, classification_color(classification)),
            dim_count_cell(names),
            dim_count_cell(numbers),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    if result.has_unexplained {
        eprintln!("Unexplained words remain; see the report for details.");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn classification_cell(classification: Classification) -> Cell {
    Cell::new(classification.as_str()).fg(classification_color(classification))
}

fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Resolved => Color::Green,
        Classification::AcceptedVariation => Color::Green,
        Classification::LegitimateVariation => Color::Blue,
        Classification::LikelyTypo => Color::Yellow,
        Classification::Unexplained => Color::Red,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
