use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult) {
    println!("Data: {}", result.data_file.display());
    println!("Schema: {}", result.schema_file.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lines"),
        header_cell("Fields"),
        header_cell("Failures"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.lines.len()),
        Cell::new(result.field_count()),
        count_cell(result.failure_count(), Color::Red),
    ]);
    println!("{table}");
    print_failure_table(result);
}

fn print_failure_table(result: &CheckResult) {
    let mut failures = Vec::new();
    for (index, line) in result.lines.iter().enumerate() {
        for field in line.fields.iter().filter(|field| !field.passed) {
            failures.push((index + 1, field));
        }
    }
    if failures.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Field"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (line_number, field) in failures {
        table.add_row(vec![
            Cell::new(line_number),
            Cell::new(&field.field_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&field.message).fg(Color::Red),
            value_cell(&field.actual_value),
        ]);
    }
    println!();
    println!("Failures:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
