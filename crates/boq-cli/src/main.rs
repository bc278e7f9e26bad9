//! BoQ picker CLI.

use std::io::{self, IsTerminal};

use boq_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod display;
mod prompts;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_query, run_sheets};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Query(args) => match run_query(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("錯誤：{error:#}");
                1
            }
        },
        Command::Sheets(args) => match run_sheets(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("錯誤：{error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
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
