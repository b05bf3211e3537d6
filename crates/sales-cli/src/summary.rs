use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sales_cli::types::{BronzeResult, GoldResult, RunResult, SilverResult};
use sales_model::RejectedRecord;
use sales_report::frame_rows;

pub fn print_bronze(result: &BronzeResult) {
    println!("Bronze table: {}", result.table.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Order ids"),
        header_cell("Table rows"),
        header_cell("Missing cells"),
        header_cell("Blank lag"),
    ]);
    apply_table_style(&mut table);
    for column in 1..6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for batch in &result.batches {
        let ids = match batch.order_ids {
            Some((first, last)) => format!("{first}-{last}"),
            None => "-".to_string(),
        };
        let missing: usize = batch.diagnostics.missing.values().sum();
        table.add_row(vec![
            Cell::new(batch.source.display()),
            Cell::new(batch.appended),
            Cell::new(ids),
            Cell::new(batch.total_rows),
            count_cell(missing, Color::Yellow),
            count_cell(batch.diagnostics.blank_delivery_periods, Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn print_silver(result: &SilverResult, show_rejections: bool) {
    println!("Silver table: {}", result.paths.sales.display());
    println!("Rejections: {}", result.paths.rejections.display());
    println!("Report: {}", result.paths.report.display());
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Bronze input", result.bronze_rows, None),
        ("Coercion failures", report.total_coercion_failures(), Some(Color::Yellow)),
        ("Imputed prices", report.imputed_prices, None),
        ("Imputed lags", report.imputed_delivery_periods, None),
        ("Dropped (no lag)", report.dropped_missing_lag.len(), Some(Color::Red)),
        ("Recomputed totals", report.recomputed_totals, None),
        ("Filled fields", report.total_filled(), None),
        ("Rejected (missing)", report.rejected_missing, Some(Color::Red)),
        ("Rejected (duplicate)", report.rejected_duplicates, Some(Color::Red)),
    ];
    for (label, count, color) in rows {
        let cell = match color {
            Some(color) => count_cell(count, color),
            None => Cell::new(count),
        };
        table.add_row(vec![Cell::new(label), cell]);
    }
    table.add_row(vec![
        Cell::new("Accepted")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.accepted).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_unmapped(result);
    if show_rejections {
        print_rejections(&result.rejected);
    }
}

fn print_unmapped(result: &SilverResult) {
    if result.report.unmapped_labels.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Unmapped label"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (field, labels) in &result.report.unmapped_labels {
        for (label, count) in labels {
            table.add_row(vec![
                Cell::new(field),
                Cell::new(label),
                count_cell(*count, Color::Yellow),
            ]);
        }
    }
    println!("{table}");
}

fn print_rejections(rejected: &[RejectedRecord]) {
    if rejected.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Customer"),
        header_cell("Reason"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in rejected {
        table.add_row(vec![
            record.order_id.map_or_else(|| dim_cell("-"), Cell::new),
            record
                .cust_id
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(record.reason).fg(Color::Red),
            Cell::new(record.missing_fields_label()),
        ]);
    }
    println!("{table}");
}

pub fn print_gold(result: &GoldResult) {
    for (table_data, path) in result.tables.iter().zip(&result.written) {
        println!("{} ({})", table_data.name, path.display());
        let mut table = Table::new();
        let header: Vec<Cell> = table_data
            .frame
            .get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect();
        table.set_header(header);
        apply_table_style(&mut table);
        match frame_rows(&table_data.frame) {
            Ok(rows) => {
                for row in rows {
                    table.add_row(row);
                }
            }
            Err(error) => eprintln!("error: {error}"),
        }
        println!("{table}");
    }
}

pub fn print_run(result: &RunResult, show_rejections: bool) {
    if let Some(bronze) = &result.bronze {
        print_bronze(bronze);
    }
    print_silver(&result.silver, show_rejections);
    print_gold(&result.gold);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
