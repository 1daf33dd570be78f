//! Export surface for the VeriPak QC dashboard.
//!
//! Serializes the current filtered view back into the same delimited
//! dialect the ingest side reads, re-quoting fields as needed.

pub mod error;
pub mod export;

pub use error::{ExportError, Result};
pub use export::{export_rows, write_csv};
