//! Delimited-text export of a header plus a (possibly filtered) row view.

use std::path::Path;

use veripak_model::Row;

use crate::error::{ExportError, Result};

/// Quote-wrap a field iff it needs it: embedded comma, quote, or newline.
/// Internal quotes are doubled.
fn encode_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn encode_line(fields: impl Iterator<Item = impl AsRef<str>>) -> String {
    fields
        .map(|field| encode_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialize a view back into delimited text, header row first.
///
/// Fields are emitted in header order with quote-wrapping applied to header
/// and data cells alike, so the output parses back to the same values.
///
/// # Errors
///
/// Returns [`ExportError::NoData`] when the view holds no rows.
pub fn export_rows(columns: &[String], rows: &[&Row]) -> Result<String> {
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(encode_line(columns.iter()));
    for row in rows {
        lines.push(encode_line(row.cells.iter()));
    }
    tracing::debug!(rows = rows.len(), "exported view");
    Ok(lines.join("\n"))
}

/// Serialize a view and write it to disk.
///
/// # Errors
///
/// Same as [`export_rows`], plus [`ExportError::Io`] on write failure.
pub fn write_csv(path: &Path, columns: &[String], rows: &[&Row]) -> Result<()> {
    let text = export_rows(columns, rows)?;
    std::fs::write(path, text)?;
    Ok(())
}
