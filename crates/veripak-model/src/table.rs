#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One data row. Cells are stored positionally, aligned to the owning
/// table's header; the builder only admits rows whose arity matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// An ordered set of rows under an ordered header.
///
/// Invariant: every row has exactly `columns.len()` cells. All cell values
/// are strings; no type coercion happens at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Push a row, rejecting arity mismatches. Returns whether the row
    /// was accepted.
    pub fn push_row(&mut self, row: Row) -> bool {
        if row.cells.len() != self.columns.len() {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Resolve a column name to its index.
    ///
    /// Duplicate header names resolve to the last occurrence, matching the
    /// source format's later-column-overwrites-earlier behavior.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|column| column == name)
    }

    /// Named cell lookup on a row of this table. Returns `None` when the
    /// column does not exist.
    pub fn cell<'a>(&self, row: &'a Row, name: &str) -> Option<&'a str> {
        self.column_index(name).and_then(|index| row.cell(index))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
