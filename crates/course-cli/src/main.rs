//! Course marks report CLI.

use std::io::{self, IsTerminal, Write};

use clap::{ColorChoice, Parser};
use course_cli::logging::{LogConfig, LogFormat, init_logging};
use course_cli::prompt::Prompter;
use course_cli::{OutputStyle, SessionOptions, run_session};
use tracing::info;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = session_options_from_cli(&cli);

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Keep stdout a clean JSON document by prompting on stderr.
    let prompt_stream: Box<dyn Write> = match options.output {
        OutputStyle::Json => Box::new(io::stderr()),
        OutputStyle::Text | OutputStyle::Table => Box::new(io::stdout()),
    };
    let mut prompter = Prompter::new(stdin, prompt_stream);

    let mut exit_code = match run_session(&options, &mut prompter, &mut out) {
        Ok(outcome) => {
            info!(
                loaded = outcome.loaded,
                selected = outcome.selected,
                "report complete"
            );
            0
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };
    if let Err(error) = out.flush() {
        eprintln!("error: write report: {error}");
        exit_code = 1;
    }
    std::process::exit(exit_code);
}

fn session_options_from_cli(cli: &Cli) -> SessionOptions {
    SessionOptions {
        file: cli.file.clone(),
        sort: cli.sort.clone(),
        filter: cli.filter.clone(),
        output: match cli.output {
            OutputFormatArg::Text => OutputStyle::Text,
            OutputFormatArg::Table => OutputStyle::Table,
            OutputFormatArg::Json => OutputStyle::Json,
        },
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
