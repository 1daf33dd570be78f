//! Stateful dashboard session: the surface the display layer talks to.
//!
//! A session owns one loaded table plus the current filter state. The
//! filtered view is recomputed eagerly on every filter change; loading a
//! new table discards all derived state. Everything is single-threaded and
//! synchronous, so there is no staleness to reason about.

use serde::{Deserialize, Serialize};

use veripak_model::{KpiSnapshot, ProductSummary, Row, Table};

use crate::aggregate::aggregate;
use crate::filter::Filter;
use crate::kpi::compute_kpis;

/// Row/column counts surfaced next to the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStats {
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub columns: usize,
}

pub struct DashboardSession {
    table: Table,
    filter: Filter,
    view: Vec<usize>,
}

impl DashboardSession {
    /// Load raw delimited text, replacing any previous state.
    ///
    /// # Errors
    ///
    /// Returns [`veripak_ingest::IngestError::EmptyInput`] when the text has
    /// no usable lines.
    pub fn load(raw: &str) -> veripak_ingest::Result<Self> {
        Ok(Self::from_table(veripak_ingest::build_table(raw)?))
    }

    pub fn from_table(table: Table) -> Self {
        let view = (0..table.row_count()).collect();
        Self {
            table,
            filter: Filter::None,
            view,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Set a free-text filter; replaces any column filter in effect.
    pub fn set_free_text_filter(&mut self, term: impl Into<String>) {
        self.filter = Filter::free_text(term);
        self.refresh();
    }

    /// Set a column-scoped filter; replaces any free-text filter in effect.
    pub fn set_column_filter(&mut self, column: impl Into<String>, term: impl Into<String>) {
        self.filter = Filter::column(column, term);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter = Filter::None;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = self.filter.apply(&self.table);
    }

    /// The rows matching the current filter, in table order.
    pub fn current_view(&self) -> Vec<&Row> {
        self.view.iter().map(|&index| &self.table.rows[index]).collect()
    }

    pub fn stats(&self) -> ViewStats {
        ViewStats {
            total_rows: self.table.row_count(),
            filtered_rows: self.view.len(),
            columns: self.table.column_count(),
        }
    }

    /// Aggregate the full table (not the filtered view) per product.
    pub fn aggregate(&self) -> Vec<ProductSummary> {
        aggregate(&self.table)
    }

    /// KPI snapshot over the full table's aggregation.
    pub fn compute_kpis(&self) -> KpiSnapshot {
        compute_kpis(&self.aggregate())
    }

    /// Serialize the current filtered view as delimited text.
    ///
    /// # Errors
    ///
    /// Returns [`veripak_report::ExportError::NoData`] when the view is
    /// empty. The session state is untouched either way.
    pub fn export_current_view(&self) -> veripak_report::Result<String> {
        veripak_report::export_rows(&self.table.columns, &self.current_view())
    }
}
