#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Defect classification tallied per product run.
///
/// The variant order is the declared tie-break order for top-category
/// selection: inspection first, then weight, then machine detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectCategory {
    Inspection,
    Weight,
    MachineDetect,
}

impl RejectCategory {
    pub const ALL: [RejectCategory; 3] = [
        RejectCategory::Inspection,
        RejectCategory::Weight,
        RejectCategory::MachineDetect,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RejectCategory::Inspection => "Inspection Rejects",
            RejectCategory::Weight => "Weight Rejects",
            RejectCategory::MachineDetect => "MD Rejects",
        }
    }
}

/// Observed reject count paired with its KPI ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectMetric {
    pub value: u64,
    pub kpi: u64,
}

impl RejectMetric {
    pub fn new(value: u64, kpi: u64) -> Self {
        Self { value, kpi }
    }

    /// A KPI of 0 is a valid zero-tolerance target: any reject is over.
    pub fn is_over_kpi(self) -> bool {
        self.value > self.kpi
    }

    /// Gauge fill ratio against the KPI ceiling, clamped to 100.
    ///
    /// Zero-tolerance targets read 0% when clean and 100% otherwise.
    pub fn gauge_percent(self) -> f64 {
        if self.kpi == 0 {
            if self.value == 0 { 0.0 } else { 100.0 }
        } else {
            (self.value as f64 / self.kpi as f64 * 100.0).min(100.0)
        }
    }
}

/// One operator's hours on a product run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorShift {
    pub name: String,
    pub hours: f64,
}

/// Per-product aggregation of one or more raw inspection rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product: String,
    pub upc: String,
    pub operators: Vec<OperatorShift>,
    pub inspection: RejectMetric,
    pub weight: RejectMetric,
    pub md: RejectMetric,
    pub total_units: u64,
}

impl ProductSummary {
    pub fn metric(&self, category: RejectCategory) -> RejectMetric {
        match category {
            RejectCategory::Inspection => self.inspection,
            RejectCategory::Weight => self.weight,
            RejectCategory::MachineDetect => self.md,
        }
    }

    pub fn total_rejects(&self) -> u64 {
        self.inspection.value + self.weight.value + self.md.value
    }
}

/// Summed reject counts per category across all products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub inspection: u64,
    pub weight: u64,
    pub md: u64,
}

impl CategoryTotals {
    pub fn get(self, category: RejectCategory) -> u64 {
        match category {
            RejectCategory::Inspection => self.inspection,
            RejectCategory::Weight => self.weight,
            RejectCategory::MachineDetect => self.md,
        }
    }
}

/// Dashboard-level statistics over the current product summaries.
///
/// `reject_rate` is a percentage and is `None` when no units were produced,
/// so a zero-unit load can never surface NaN to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub total_units: u64,
    pub total_rejects: u64,
    pub reject_rate: Option<f64>,
    pub top_category: RejectCategory,
    pub category_totals: CategoryTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_percent_clamps_at_100() {
        assert_eq!(RejectMetric::new(32, 25).gauge_percent(), 100.0);
        assert_eq!(RejectMetric::new(18, 50).gauge_percent(), 36.0);
    }

    #[test]
    fn zero_tolerance_target() {
        let clean = RejectMetric::new(0, 0);
        let dirty = RejectMetric::new(1, 0);
        assert!(!clean.is_over_kpi());
        assert_eq!(clean.gauge_percent(), 0.0);
        assert!(dirty.is_over_kpi());
        assert_eq!(dirty.gauge_percent(), 100.0);
    }

    #[test]
    fn snapshot_serializes() {
        let snapshot = KpiSnapshot {
            total_units: 25650,
            total_rejects: 62,
            reject_rate: Some(0.24),
            top_category: RejectCategory::Inspection,
            category_totals: CategoryTotals {
                inspection: 32,
                weight: 18,
                md: 12,
            },
        };
        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        let round: KpiSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
        assert_eq!(round, snapshot);
        assert!(json.contains("\"inspection\""));
    }
}
