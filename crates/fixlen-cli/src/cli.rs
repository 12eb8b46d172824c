//! CLI argument definitions for the fixlen checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fixlen",
    version,
    about = "Fixed-width record checker - validate data files against a field schema",
    long_about = "Validate fixed-width text records against a declarative schema.\n\n\
                  Schemas list fields by name and width with optional fixed-value,\n\
                  blank and regex constraints. Widths are measured in bytes or\n\
                  characters depending on --length-mode."
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
    /// Check a data file against a schema file.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the fixed-width data file.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Path to the schema file (.json, .yml or .yaml).
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema_file: PathBuf,

    /// Character encoding of the data file (WHATWG label, e.g. utf-8, shift_jis).
    #[arg(long = "charset", value_name = "LABEL", default_value = "utf-8")]
    pub charset: String,

    /// Unit used for field widths and offsets.
    #[arg(long = "length-mode", value_enum, default_value = "bytes")]
    pub length_mode: LengthModeArg,
}

/// Width unit choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LengthModeArg {
    Bytes,
    Chars,
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
