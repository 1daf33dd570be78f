//! Engine layer for the VeriPak QC dashboard.
//!
//! Builds on [`veripak_ingest`] and [`veripak_model`] to provide the three
//! derivation pipelines the display layer consumes:
//!
//! - **filtering** — free-text or column-scoped substring views
//! - **aggregation** — per-product summaries with operator shifts and
//!   reject-vs-KPI metrics
//! - **KPI statistics** — totals, reject rate, and top reject category
//!
//! [`DashboardSession`] ties the three together behind one stateful facade.

pub mod aggregate;
pub mod filter;
pub mod kpi;
pub mod session;

pub use aggregate::aggregate;
pub use filter::Filter;
pub use kpi::compute_kpis;
pub use session::{DashboardSession, ViewStats};
