//! Command-line arguments for the catalog verifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use catalog_validate::{DateCheck, SequenceBaseline};

#[derive(Parser)]
#[command(
    name = "catalog-verify",
    version,
    about = "Verify bilingual correspondence catalog worksheets",
    long_about = "Check every catalog cell of a worksheet against the controlled vocabularies.\n\n\
                  Writes a copy of the worksheet with failing cells filled red (Hard) or\n\
                  yellow (Soft) and a diagnostics file with one line per checked cell."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Verify a catalog worksheet and write the marked copy.
    Verify(VerifyArgs),

    /// List the catalog columns and the rule that checks each.
    Columns,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Catalog worksheet (.xlsx, .xlsm, .xls or .csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Worksheet to read from a workbook (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Directory holding the reference files under their default names.
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Subject headings table (default: SUBJECT_LCSH.xlsx).
    #[arg(long = "subjects", value_name = "PATH")]
    pub subjects: Option<PathBuf>,

    /// Gazetteer table (default: Maybeee.xlsx).
    #[arg(long = "gazetteer", value_name = "PATH")]
    pub gazetteer: Option<PathBuf>,

    /// Authorized names table (default: CVPeople.xlsx).
    #[arg(long = "names", value_name = "PATH")]
    pub names: Option<PathBuf>,

    /// Output directory (default: the directory of FILE).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Which identifier the next row's letter number is compared with.
    #[arg(long = "sequence-baseline", value_enum, default_value = "last-valid")]
    pub sequence_baseline: SequenceBaselineArg,

    /// How DATE cells are checked.
    #[arg(long = "date-check", value_enum, default_value = "match-title")]
    pub date_check: DateCheckArg,

    /// Also write a JSON summary with every failing cell.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Exit with status 1 when any cell has a Hard error.
    #[arg(long = "fail-on-hard")]
    pub fail_on_hard: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SequenceBaselineArg {
    /// Compare with the last identifier that passed.
    LastValid,
    /// Compare with the last well-formed identifier, pass or fail.
    AlwaysAdvance,
}

impl From<SequenceBaselineArg> for SequenceBaseline {
    fn from(value: SequenceBaselineArg) -> Self {
        match value {
            SequenceBaselineArg::LastValid => Self::LastValid,
            SequenceBaselineArg::AlwaysAdvance => Self::AlwaysAdvance,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DateCheckArg {
    /// Full date that must match the date written in TITLE.
    MatchTitle,
    /// YYYY-MM-DD or YYYY-MM; empty dates pass.
    FormatOnly,
}

impl From<DateCheckArg> for DateCheck {
    fn from(value: DateCheckArg) -> Self {
        match value {
            DateCheckArg::MatchTitle => Self::MatchTitle,
            DateCheckArg::FormatOnly => Self::FormatOnly,
        }
    }
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
