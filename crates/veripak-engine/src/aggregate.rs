//! Per-product aggregation of raw inspection rows.
//!
//! Source files repeat the per-product numeric columns on every operator
//! row, so numeric fields are read once from the first row per product and
//! later rows only contribute operator entries.

use std::collections::HashMap;

use veripak_model::{OperatorShift, ProductSummary, RejectMetric, Table};

/// Column vocabulary expected in aggregation mode. Absent or misnamed
/// columns degrade to empty strings and zero counts.
pub mod columns {
    pub const PRODUCT: &str = "Product";
    pub const UPC: &str = "UPC";
    pub const OPERATOR: &str = "Operator";
    pub const HOURS: &str = "Hours";
    pub const INSPECTION_REJECTS: &str = "InspectionRejects";
    pub const INSPECTION_KPI: &str = "InspectionKPI";
    pub const WEIGHT_REJECTS: &str = "WeightRejects";
    pub const WEIGHT_KPI: &str = "WeightKPI";
    pub const MD_REJECTS: &str = "MDRejects";
    pub const MD_KPI: &str = "MDKPI";
    pub const TOTAL_UNITS: &str = "TotalUnits";
}

/// Lenient count parsing: absent, blank, or non-numeric cells become 0.
fn parse_count(cell: Option<&str>) -> u64 {
    cell.and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Hours may be fractional; negatives clamp to zero.
fn parse_hours(cell: Option<&str>) -> f64 {
    cell.and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
        .max(0.0)
}

/// Fold raw rows into per-product summaries, in first-seen order.
///
/// The grouping key is the UPC cell when non-empty, otherwise the product
/// name. Every row carrying a non-empty operator name appends one
/// [`OperatorShift`] to its product, including the row that created the
/// summary.
pub fn aggregate(table: &Table) -> Vec<ProductSummary> {
    let mut summaries: Vec<ProductSummary> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    for row in &table.rows {
        let product = table.cell(row, columns::PRODUCT).unwrap_or("");
        let upc = table.cell(row, columns::UPC).unwrap_or("");
        let key = if upc.is_empty() { product } else { upc };
        let index = match index_by_key.get(key) {
            Some(&index) => index,
            None => {
                summaries.push(ProductSummary {
                    product: product.to_string(),
                    upc: upc.to_string(),
                    operators: Vec::new(),
                    inspection: RejectMetric::new(
                        parse_count(table.cell(row, columns::INSPECTION_REJECTS)),
                        parse_count(table.cell(row, columns::INSPECTION_KPI)),
                    ),
                    weight: RejectMetric::new(
                        parse_count(table.cell(row, columns::WEIGHT_REJECTS)),
                        parse_count(table.cell(row, columns::WEIGHT_KPI)),
                    ),
                    md: RejectMetric::new(
                        parse_count(table.cell(row, columns::MD_REJECTS)),
                        parse_count(table.cell(row, columns::MD_KPI)),
                    ),
                    total_units: parse_count(table.cell(row, columns::TOTAL_UNITS)),
                });
                index_by_key.insert(key.to_string(), summaries.len() - 1);
                summaries.len() - 1
            }
        };
        if let Some(operator) = table.cell(row, columns::OPERATOR)
            && !operator.is_empty()
        {
            summaries[index].operators.push(OperatorShift {
                name: operator.to_string(),
                hours: parse_hours(table.cell(row, columns::HOURS)),
            });
        }
    }
    tracing::debug!(
        products = summaries.len(),
        rows = table.row_count(),
        "aggregated inspection rows"
    );
    summaries
}
