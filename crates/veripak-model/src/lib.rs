//! Core data model for the VeriPak QC dashboard.
//!
//! Everything here is plain data: the string-cell [`Table`] produced by
//! ingestion and the per-product aggregation types consumed by the display
//! layer. No I/O and no presentation state live in this crate.

pub mod summary;
pub mod table;

pub use summary::{
    CategoryTotals, KpiSnapshot, OperatorShift, ProductSummary, RejectCategory, RejectMetric,
};
pub use table::{Row, Table};
