//! CLI argument definitions for the entry builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mce_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "mce",
    version,
    about = "Metacatalog Entry Creator - build catalog entries for scientific datasets",
    long_about = "Build a metacatalog entry from the reference catalog and a recorded\n\
                  session of form actions.\n\n\
                  Outputs the entry as JSON or as a Python snippet using the\n\
                  metacatalog API."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reference catalog (default: $METACATALOG_BASE_DATA or the bundled catalog).
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the reference catalog.
    Catalog,

    /// Replay recorded session actions and print the finished entry.
    Create(CreateArgs),
}

#[derive(Parser)]
pub struct CreateArgs {
    /// JSON file with an array of session actions.
    #[arg(long = "actions", value_name = "FILE")]
    pub actions: PathBuf,

    /// Output format of the entry (json or python).
    #[arg(long = "format", value_name = "FORMAT", default_value = "json")]
    pub format: OutputFormat,

    /// Write the entry to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Connection string for the generated Python snippet.
    #[arg(long = "connection", value_name = "URI")]
    pub connection: Option<String>,
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
