//! Ingestion for the VeriPak QC dashboard: delimited-text parsing and
//! table construction.
//!
//! The parsing policy favors availability over strict validation: quoting
//! problems degrade into literal text, rows with the wrong field count are
//! dropped rather than reported, and the only hard failure is input with no
//! usable lines at all.

pub mod builder;
pub mod error;
pub mod record;

pub use builder::{build_table, load_table};
pub use error::{IngestError, Result};
pub use record::{parse_record, tokenize_lines};
