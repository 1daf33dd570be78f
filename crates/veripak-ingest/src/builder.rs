//! Table construction from raw delimited text.

use std::path::Path;

use veripak_model::{Row, Table};

use crate::error::{IngestError, Result};
use crate::record::{parse_record, tokenize_lines};

/// Build a [`Table`] from raw file content.
///
/// The first non-blank line is the header. Data lines are accepted only
/// when their field count matches the header arity; mismatched rows are
/// dropped silently (visible only in the row count and debug logs). Cell
/// values remain strings.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`] when no non-blank lines remain.
pub fn build_table(raw: &str) -> Result<Table> {
    let lines = tokenize_lines(raw);
    let Some((header, data)) = lines.split_first() else {
        return Err(IngestError::EmptyInput);
    };
    let mut table = Table::new(parse_record(header));
    let mut dropped = 0usize;
    for line in data {
        if !table.push_row(Row::new(parse_record(line))) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "dropped rows with header arity mismatch");
    }
    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "built table"
    );
    Ok(table)
}

/// Read a delimited file and build a [`Table`] from it.
///
/// # Errors
///
/// Returns [`IngestError::Io`] when the file cannot be read, otherwise the
/// same errors as [`build_table`].
pub fn load_table(path: &Path) -> Result<Table> {
    let raw = std::fs::read_to_string(path)?;
    build_table(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_rows() {
        let table = build_table("Product,UPC\nCola,123\nSprite,456\n").unwrap();
        assert_eq!(table.columns, vec!["Product", "UPC"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(&table.rows[1], "UPC"), Some("456"));
    }

    #[test]
    fn blank_lines_are_tolerated() {
        let table = build_table("\n\nProduct,UPC\n\nCola,123\n   \n").unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn arity_mismatch_drops_row_without_error() {
        let table = build_table("A,B,C\n1,2\n1,2,3\n1,2,3,4\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0].cells, vec!["1", "2", "3"]);
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        let error = build_table("  \n\t\n   \n").unwrap_err();
        assert!(matches!(error, IngestError::EmptyInput));
        assert!(matches!(build_table("").unwrap_err(), IngestError::EmptyInput));
    }

    #[test]
    fn quoted_cells_survive_table_build() {
        let table = build_table("Note,Code\n\"He said \"\"hi\"\", now\",x1\n").unwrap();
        assert_eq!(
            table.cell(&table.rows[0], "Note"),
            Some("He said \"hi\", now")
        );
    }

    #[test]
    fn loads_table_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.csv");
        std::fs::write(&path, "Product,UPC\nCola,123\n").unwrap();
        let table = load_table(&path).unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
