//! Metacatalog Entry Creator CLI.

use clap::{ColorChoice, Parser};
use mce_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_catalog, run_catalog, run_create};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let catalog = match load_catalog(cli.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let result = match &cli.command {
        Command::Catalog => run_catalog(&catalog),
        Command::Create(args) => run_create(&catalog, args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use mce_output::OutputFormat;

    #[test]
    fn log_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "mce",
            "--log-timestamps",
            "--log-target",
            "--log-format",
            "json",
            "catalog",
        ])
        .unwrap();
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert_eq!(config.format, LogFormat::Json);

        let config = log_config_from_cli(&Cli::try_parse_from(["mce", "catalog"]).unwrap());
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }

    #[test]
    fn format_flag_parses_into_output_format() {
        let cli =
            Cli::try_parse_from(["mce", "create", "--actions", "a.json", "--format", "py"])
                .unwrap();
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.format, OutputFormat::Python);

        let cli = Cli::try_parse_from(["mce", "create", "--actions", "a.json"]).unwrap();
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.format, OutputFormat::Json);

        assert!(
            Cli::try_parse_from(["mce", "create", "--actions", "a.json", "--format", "yaml"])
                .is_err()
        );
    }
}
