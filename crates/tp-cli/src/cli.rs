//! CLI argument definitions for the time panel driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "timepanel",
    version,
    about = "Drive the time-selection panel core from the command line",
    long_about = "Format values through the cached header deriver and replay keyboard\n\
                  sequences against the column focus controller."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
    /// Format a value under one or more patterns.
    Format(FormatArgs),

    /// Replay a key sequence against a panel and show each step.
    Keys(KeysArgs),

    /// List the built-in locales.
    Locales,
}

#[derive(Parser)]
pub struct FormatArgs {
    /// Value to format (YYYY-MM-DD[THH:MM[:SS]]).
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Format pattern; repeat for several (default: formats from settings).
    #[arg(short = 'f', long = "format", value_name = "PATTERN")]
    pub formats: Vec<String>,

    /// Locale code (default: locale from settings).
    #[arg(long = "locale", value_name = "NAME")]
    pub locale: Option<String>,

    /// Print the texts as JSON.
    #[arg(long = "json", conflicts_with = "plain")]
    pub json: bool,

    /// Print the texts as plain lines instead of a table.
    #[arg(long = "plain")]
    pub plain: bool,
}

#[derive(Parser)]
pub struct KeysArgs {
    /// Keys separated by commas or spaces, e.g. "down,right,up,enter".
    ///
    /// Modifiers are joined with '+' (ctrl+left); "blur" drops focus.
    #[arg(value_name = "KEYS")]
    pub keys: String,

    /// Initial panel value (default: empty).
    #[arg(long = "value", value_name = "VALUE")]
    pub value: Option<String>,

    /// Header pattern; also decides the columns unless --columns is given.
    #[arg(long = "format", value_name = "PATTERN")]
    pub format: Option<String>,

    /// Columns to show.
    #[arg(long = "columns", value_enum, value_delimiter = ',')]
    pub columns: Vec<ColumnArg>,

    /// Add the AM/PM column.
    #[arg(long = "use-12-hours")]
    pub use_12_hours: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    Hour,
    Minute,
    Second,
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
