//! Terminal rendering of row views, product summaries, and KPI statistics.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use veripak_engine::ViewStats;
use veripak_model::{KpiSnapshot, ProductSummary, RejectCategory, RejectMetric, Row};

/// Render the (possibly filtered) row view plus its stats block.
pub fn print_view(columns: &[String], view: &[&Row], stats: ViewStats) {
    let mut table = Table::new();
    table.set_header(columns.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_view_table_style(&mut table);
    for row in view {
        table.add_row(row.cells.iter().map(Cell::new).collect::<Vec<_>>());
    }
    println!("{table}");
    println!("Showing {} of {} rows", stats.filtered_rows, stats.total_rows);
    println!(
        "Total rows: {}  Filtered rows: {}  Columns: {}",
        stats.total_rows, stats.filtered_rows, stats.columns
    );
}

/// Render the per-product summary table: operators plus the three
/// reject-vs-KPI cells.
pub fn print_product_table(summaries: &[ProductSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Product / UPC"),
        header_cell("Operators"),
        header_cell("Inspection"),
        header_cell("Weight"),
        header_cell("MD"),
        header_cell("Total Units"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            product_cell(summary),
            operators_cell(summary),
            reject_cell(summary.inspection),
            reject_cell(summary.weight),
            reject_cell(summary.md),
            Cell::new(summary.total_units),
        ]);
    }
    println!("{table}");
}

/// Render the KPI snapshot block.
pub fn print_kpis(snapshot: &KpiSnapshot) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_kpi_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total Units"), Cell::new(snapshot.total_units)]);
    table.add_row(vec![
        Cell::new("Total Rejects"),
        Cell::new(snapshot.total_rejects),
    ]);
    table.add_row(vec![Cell::new("Reject Rate"), rate_cell(snapshot.reject_rate)]);
    table.add_row(vec![
        Cell::new("Top Reject Category"),
        Cell::new(snapshot.top_category.label())
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    ]);
    for category in RejectCategory::ALL {
        table.add_row(vec![
            dim_cell(category.label()),
            dim_cell(snapshot.category_totals.get(category)),
        ]);
    }
    println!("{table}");
}

fn product_cell(summary: &ProductSummary) -> Cell {
    let text = if summary.upc.is_empty() {
        summary.product.clone()
    } else {
        format!("{}\nUPC: {}", summary.product, summary.upc)
    };
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn operators_cell(summary: &ProductSummary) -> Cell {
    if summary.operators.is_empty() {
        return dim_cell("-");
    }
    let lines: Vec<String> = summary
        .operators
        .iter()
        .map(|shift| format!("{} ({} hrs)", shift.name, shift.hours))
        .collect();
    Cell::new(lines.join("\n"))
}

fn reject_cell(metric: RejectMetric) -> Cell {
    let text = format!(
        "{}\nKPI {} ({:.0}%)",
        metric.value,
        metric.kpi,
        metric.gauge_percent()
    );
    if metric.is_over_kpi() {
        Cell::new(text).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(text).fg(Color::Green)
    }
}

fn rate_cell(rate: Option<f64>) -> Cell {
    match rate {
        Some(value) => Cell::new(format!("{value:.2}%")),
        None => dim_cell("-"),
    }
}

fn apply_view_table_style(table: &mut Table) {
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
        .set_width(140);
}

fn apply_kpi_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
