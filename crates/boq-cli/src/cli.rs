//! CLI argument definitions for the BoQ picker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "boq-picker",
    version,
    about = "單價分析查詢工具 - build a pick-list from a priced BoQ workbook",
    long_about = "Load a priced bill-of-quantities workbook (.xls/.xlsx), bind its\n\
                  columns to canonical fields, search work items by keyword, retain\n\
                  rows with checkboxes and export the pick-list as 保留工項.csv\n\
                  (UTF-8 with BOM). A planting specification workbook can be\n\
                  queried alongside the main table."
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
    /// Interactive query session over a priced BoQ workbook.
    Query(QueryArgs),

    /// List the sheet names of a workbook.
    Sheets(SheetsArgs),
}

#[derive(Parser)]
pub struct QueryArgs {
    /// The priced unit-price analysis workbook (.xls or .xlsx).
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Planting specification workbook, queried alongside the main table.
    #[arg(long = "plant", value_name = "WORKBOOK")]
    pub plant: Option<PathBuf>,

    /// Header rows to skip in the main workbook (default prompt: 6).
    #[arg(long = "skip-rows", value_name = "N")]
    pub skip_rows: Option<usize>,

    /// Header rows to skip in the planting workbook (default prompt: 0).
    #[arg(long = "plant-skip-rows", value_name = "N")]
    pub plant_skip_rows: Option<usize>,

    /// JSON bindings file; skips the interactive column binding step.
    #[arg(long = "bindings", value_name = "FILE")]
    pub bindings: Option<PathBuf>,

    /// Directory the exported CSV is written to.
    #[arg(long = "output", value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct SheetsArgs {
    /// The workbook to inspect.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,
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
