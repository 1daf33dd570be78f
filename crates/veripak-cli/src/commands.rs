//! Command implementations for the VeriPak CLI.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use veripak_engine::{DashboardSession, compute_kpis};
use veripak_model::{Row, Table};

use crate::cli::{SummaryArgs, ViewArgs};
use crate::summary::{print_kpis, print_product_table, print_view};

fn load_session(path: &Path) -> Result<DashboardSession> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let session =
        DashboardSession::load(&raw).with_context(|| format!("parse {}", path.display()))?;
    let stats = session.stats();
    info!(
        rows = stats.total_rows,
        columns = stats.columns,
        file = %path.display(),
        "loaded run file"
    );
    Ok(session)
}

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let mut session = load_session(&args.file)?;
    if let Some(term) = &args.search {
        session.set_free_text_filter(term.as_str());
    }
    if let (Some(column), Some(term)) = (&args.column, &args.term) {
        session.set_column_filter(column.as_str(), term.as_str());
    }
    if let Some(path) = &args.output {
        let text = session
            .export_current_view()
            .context("export filtered view")?;
        std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
        let stats = session.stats();
        println!(
            "Exported {} of {} rows to {}",
            stats.filtered_rows,
            stats.total_rows,
            path.display()
        );
        return Ok(());
    }
    if args.json {
        let rows = rows_as_json(session.table(), &session.current_view());
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_view(
            &session.table().columns,
            &session.current_view(),
            session.stats(),
        );
    }
    Ok(())
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let session = load_session(&args.file)?;
    let summaries = session.aggregate();
    let snapshot = compute_kpis(&summaries);
    info!(products = summaries.len(), "aggregated run file");
    if args.json {
        let payload = serde_json::json!({
            "products": summaries,
            "kpis": snapshot,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_product_table(&summaries);
        print_kpis(&snapshot);
    }
    Ok(())
}

/// Rows as JSON objects keyed by column name. With duplicate headers the
/// later column wins, same as named cell lookup.
fn rows_as_json(table: &Table, view: &[&Row]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = view
        .iter()
        .map(|row| {
            let mut object = serde_json::Map::new();
            for (column, cell) in table.columns.iter().zip(&row.cells) {
                object.insert(column.clone(), serde_json::Value::String(cell.clone()));
            }
            serde_json::Value::Object(object)
        })
        .collect();
    serde_json::Value::Array(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "Product,UPC,Operator,Hours,InspectionRejects,InspectionKPI,\
                       WeightRejects,WeightKPI,MDRejects,MDKPI,TotalUnits\n\
                       Cola,123,Alice,8,32,25,18,50,12,20,25650\n\
                       Sprite,456,Bob,4,26,15,28,50,12,20,25650\n";

    fn view_args(file: std::path::PathBuf) -> ViewArgs {
        ViewArgs {
            file,
            search: None,
            column: None,
            term: None,
            output: None,
            json: false,
        }
    }

    #[test]
    fn view_exports_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("runs.csv");
        let output = dir.path().join("export.csv");
        std::fs::write(&input, RAW).unwrap();
        let mut args = view_args(input);
        args.search = Some("sprite".to_string());
        args.output = Some(output.clone());
        run_view(&args).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("Product,UPC"));
        assert!(text.contains("Sprite"));
        assert!(!text.contains("Cola"));
    }

    #[test]
    fn view_export_with_no_matches_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("runs.csv");
        std::fs::write(&input, RAW).unwrap();
        let mut args = view_args(input);
        args.search = Some("no such product".to_string());
        args.output = Some(dir.path().join("export.csv"));
        assert!(run_view(&args).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = run_view(&view_args("does/not/exist.csv".into())).unwrap_err();
        assert!(error.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn summary_runs_on_aggregated_data() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("runs.csv");
        std::fs::write(&input, RAW).unwrap();
        run_summary(&SummaryArgs {
            file: input,
            json: true,
        })
        .unwrap();
    }

    #[test]
    fn rows_as_json_uses_column_keys() {
        let session = DashboardSession::load("A,B\n1,2\n").unwrap();
        let json = rows_as_json(session.table(), &session.current_view());
        assert_eq!(json[0]["A"], "1");
        assert_eq!(json[0]["B"], "2");
    }
}
