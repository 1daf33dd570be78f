//! Row filtering over a loaded table.
//!
//! Exactly one filter is in effect at a time: applying a column filter
//! replaces a free-text filter and vice versa (last-applied wins). Filtering
//! always produces a fresh index view and never touches the source table.

use veripak_model::Table;

/// The current filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    /// No filtering; every row passes.
    #[default]
    None,
    /// Case-insensitive substring match against any cell in the row.
    FreeText(String),
    /// Case-insensitive substring match against one named column.
    Column { column: String, term: String },
}

impl Filter {
    pub fn free_text(term: impl Into<String>) -> Self {
        Filter::FreeText(term.into())
    }

    pub fn column(column: impl Into<String>, term: impl Into<String>) -> Self {
        Filter::Column {
            column: column.into(),
            term: term.into(),
        }
    }

    /// Compute the indices of matching rows.
    ///
    /// An empty (after trimming) free-text term passes everything, as does a
    /// column filter missing either its column or its term. A column filter
    /// naming a column the table does not have matches nothing.
    pub fn apply(&self, table: &Table) -> Vec<usize> {
        let matched: Vec<usize> = match self {
            Filter::None => (0..table.row_count()).collect(),
            Filter::FreeText(term) => {
                let needle = term.trim().to_lowercase();
                if needle.is_empty() {
                    (0..table.row_count()).collect()
                } else {
                    table
                        .rows
                        .iter()
                        .enumerate()
                        .filter(|(_, row)| {
                            row.cells
                                .iter()
                                .any(|cell| cell.to_lowercase().contains(&needle))
                        })
                        .map(|(index, _)| index)
                        .collect()
                }
            }
            Filter::Column { column, term } => {
                let needle = term.trim().to_lowercase();
                if column.is_empty() || needle.is_empty() {
                    (0..table.row_count()).collect()
                } else {
                    match table.column_index(column) {
                        Some(cell_index) => table
                            .rows
                            .iter()
                            .enumerate()
                            .filter(|(_, row)| {
                                row.cell(cell_index)
                                    .is_some_and(|cell| cell.to_lowercase().contains(&needle))
                            })
                            .map(|(index, _)| index)
                            .collect(),
                        None => Vec::new(),
                    }
                }
            }
        };
        tracing::debug!(
            matched = matched.len(),
            total = table.row_count(),
            "applied filter"
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veripak_model::Row;

    fn table() -> Table {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(Row::new(vec!["Hello".to_string(), "x".to_string()]));
        table.push_row(Row::new(vec!["world".to_string(), "y".to_string()]));
        table
    }

    #[test]
    fn free_text_is_case_insensitive_substring() {
        let table = table();
        assert_eq!(Filter::free_text("ELL").apply(&table), vec![0]);
    }

    #[test]
    fn empty_free_text_passes_everything() {
        let table = table();
        assert_eq!(Filter::free_text("").apply(&table), vec![0, 1]);
        assert_eq!(Filter::free_text("   ").apply(&table), vec![0, 1]);
    }

    #[test]
    fn free_text_scans_every_cell() {
        let table = table();
        assert_eq!(Filter::free_text("Y").apply(&table), vec![1]);
    }

    #[test]
    fn column_filter_scopes_to_one_column() {
        let table = table();
        assert_eq!(Filter::column("a", "O").apply(&table), vec![0, 1]);
        assert_eq!(Filter::column("b", "O").apply(&table), Vec::<usize>::new());
    }

    #[test]
    fn column_filter_needs_both_halves() {
        let table = table();
        assert_eq!(Filter::column("a", "").apply(&table), vec![0, 1]);
        assert_eq!(Filter::column("", "x").apply(&table), vec![0, 1]);
    }

    #[test]
    fn unknown_column_matches_nothing() {
        let table = table();
        assert_eq!(
            Filter::column("missing", "x").apply(&table),
            Vec::<usize>::new()
        );
    }
}
