//! Dashboard KPI statistics over the aggregated product summaries.

use veripak_model::{CategoryTotals, KpiSnapshot, ProductSummary, RejectCategory};

/// Compute the KPI snapshot for the current summaries.
///
/// The reject rate is a percentage of total units and is `None` when no
/// units were produced. The top category is the one with the largest summed
/// reject count; ties go to the earlier category in declared order.
pub fn compute_kpis(summaries: &[ProductSummary]) -> KpiSnapshot {
    let mut total_units = 0u64;
    let mut category_totals = CategoryTotals::default();
    for summary in summaries {
        total_units += summary.total_units;
        category_totals.inspection += summary.inspection.value;
        category_totals.weight += summary.weight.value;
        category_totals.md += summary.md.value;
    }
    let total_rejects = category_totals.inspection + category_totals.weight + category_totals.md;
    let reject_rate =
        (total_units > 0).then(|| total_rejects as f64 / total_units as f64 * 100.0);
    let mut top_category = RejectCategory::Inspection;
    for category in RejectCategory::ALL {
        if category_totals.get(category) > category_totals.get(top_category) {
            top_category = category;
        }
    }
    KpiSnapshot {
        total_units,
        total_rejects,
        reject_rate,
        top_category,
        category_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veripak_model::RejectMetric;

    fn summary(inspection: u64, weight: u64, md: u64, units: u64) -> ProductSummary {
        ProductSummary {
            product: "Cola".to_string(),
            upc: "123".to_string(),
            operators: Vec::new(),
            inspection: RejectMetric::new(inspection, 25),
            weight: RejectMetric::new(weight, 50),
            md: RejectMetric::new(md, 20),
            total_units: units,
        }
    }

    #[test]
    fn sums_units_and_rejects_across_summaries() {
        let snapshot = compute_kpis(&[summary(32, 18, 12, 25650), summary(26, 28, 12, 25650)]);
        assert_eq!(snapshot.total_units, 51300);
        assert_eq!(snapshot.total_rejects, 128);
        assert_eq!(snapshot.category_totals.inspection, 58);
        let rate = snapshot.reject_rate.unwrap();
        assert!((rate - 128.0 / 51300.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_in_declared_category_order() {
        let snapshot = compute_kpis(&[summary(30, 10, 30, 1000)]);
        assert_eq!(snapshot.top_category, RejectCategory::Inspection);
        let snapshot = compute_kpis(&[summary(10, 30, 30, 1000)]);
        assert_eq!(snapshot.top_category, RejectCategory::Weight);
    }

    #[test]
    fn md_wins_when_strictly_largest() {
        let snapshot = compute_kpis(&[summary(5, 10, 30, 1000)]);
        assert_eq!(snapshot.top_category, RejectCategory::MachineDetect);
    }

    #[test]
    fn zero_units_yields_no_rate() {
        let snapshot = compute_kpis(&[summary(3, 0, 0, 0)]);
        assert_eq!(snapshot.reject_rate, None);
        assert_eq!(snapshot.total_rejects, 3);
    }

    #[test]
    fn empty_summaries_are_safe() {
        let snapshot = compute_kpis(&[]);
        assert_eq!(snapshot.total_units, 0);
        assert_eq!(snapshot.reject_rate, None);
        assert_eq!(snapshot.top_category, RejectCategory::Inspection);
    }
}
