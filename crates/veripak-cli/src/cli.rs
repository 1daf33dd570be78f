//! CLI argument definitions for the VeriPak QC Dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "veripak",
    version,
    about = "VeriPak QC Dashboard - inspect, filter, and summarize QC run files",
    long_about = "Load a delimited QC inspection run file, filter and export row views,\n\
                  or aggregate runs per product with reject-vs-KPI statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a run file as a table, optionally filtered and exported.
    View(ViewArgs),

    /// Aggregate a run file per product and print KPI statistics.
    Summary(SummaryArgs),
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Path to the delimited QC run file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Free-text filter: keep rows where any cell contains the term.
    #[arg(long = "search", value_name = "TERM", conflicts_with = "column")]
    pub search: Option<String>,

    /// Column-scoped filter: keep rows where this column contains --term.
    #[arg(long = "column", value_name = "NAME", requires = "term")]
    pub column: Option<String>,

    /// Search term for --column.
    #[arg(long = "term", value_name = "TERM", requires = "column")]
    pub term: Option<String>,

    /// Write the filtered view as delimited text instead of rendering it.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit the filtered rows as JSON on stdout.
    #[arg(long = "json", conflicts_with = "output")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Path to the delimited QC run file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit summaries and the KPI snapshot as JSON on stdout.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
