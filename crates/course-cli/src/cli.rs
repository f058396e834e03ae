//! CLI argument definitions for the course marks report.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "course-report",
    version,
    about = "Course marks report - list courses by year with mean and standard deviation",
    long_about = "Load course records (`<mark> <code> <name>` per line), sort them,\n\
                  filter by academic year and print the mean and sample standard\n\
                  deviation of the selected marks.\n\n\
                  Any of FILE, --sort and --filter that is not given is prompted for."
)]
pub struct Cli {
    /// Course data file.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Sort key: title, code or mark. Other values keep the file order.
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Option<String>,

    /// Year selector: A for all courses or 1-4 for a single year.
    #[arg(long = "filter", value_name = "SELECTOR")]
    pub filter: Option<String>,

    /// Report layout written to stdout.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Table,
    Json,
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
