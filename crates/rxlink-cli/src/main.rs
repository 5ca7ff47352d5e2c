//! rxlink CLI.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use rxlink_cli::logging::{LogConfig, LogFormat, init_logging};
use rxlink_cli::pipeline::{EnrichConfig, run_enrichment};
use rxlink_cli::summary::{print_sources, print_summary};
use rxlink_links::{SourceBases, load_source_bases};
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, EnrichArgs, LogFormatArg, LogLevelArg, SourcesArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let command = cli
        .command
        .unwrap_or_else(|| Command::Enrich(EnrichArgs::default()));
    let exit_code = match command {
        Command::Enrich(args) => match run_enrich(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Sources(args) => match run_sources(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn run_enrich(args: &EnrichArgs) -> Result<()> {
    let config = EnrichConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        backup: args.backup.clone(),
        bases: source_bases(args.sources.as_deref())?,
        dry_run: args.dry_run,
    };
    let result = run_enrichment(&config)?;
    print_summary(&result);
    Ok(())
}

fn run_sources(args: &SourcesArgs) -> Result<()> {
    let bases = source_bases(args.sources.as_deref())?;
    print_sources(&bases);
    Ok(())
}

fn source_bases(path: Option<&Path>) -> Result<SourceBases> {
    match path {
        Some(path) => load_source_bases(path).context("load sources config"),
        None => Ok(SourceBases::default()),
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
