//! CLI argument definitions for rxlink.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use rxlink_cli::pipeline::{DEFAULT_BACKUP_CSV, DEFAULT_INPUT_CSV, DEFAULT_OUTPUT_CSV};

#[derive(Parser)]
#[command(
    name = "rxlink",
    version,
    about = "Add citation-source URL columns to a drug product table",
    long_about = "Add citation-source URL columns to a drug product table.\n\n\
                  Generates PubChem, WHO ATC/DDD, TİTCK, PubMed Central and FarmaLOG\n\
                  links from each product's name, active ingredient and ATC code.\n\
                  Without a subcommand, runs `enrich` with the default file names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Back up the input table and write it with five source URL columns.
    Enrich(EnrichArgs),

    /// List the generated columns and their base URLs.
    Sources(SourcesArgs),
}

#[derive(Args)]
pub struct EnrichArgs {
    /// Input drug table.
    #[arg(long = "input", value_name = "CSV", default_value = DEFAULT_INPUT_CSV)]
    pub input: PathBuf,

    /// Augmented output table.
    #[arg(long = "output", value_name = "CSV", default_value = DEFAULT_OUTPUT_CSV)]
    pub output: PathBuf,

    /// Verbatim copy of the input, written before any column is added.
    #[arg(long = "backup", value_name = "CSV", default_value = DEFAULT_BACKUP_CSV)]
    pub backup: PathBuf,

    /// JSON file overriding source base URLs.
    #[arg(long = "sources", value_name = "JSON")]
    pub sources: Option<PathBuf>,

    /// Generate and report without writing the backup or output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Default for EnrichArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_CSV),
            output: PathBuf::from(DEFAULT_OUTPUT_CSV),
            backup: PathBuf::from(DEFAULT_BACKUP_CSV),
            sources: None,
            dry_run: false,
        }
    }
}

#[derive(Args)]
pub struct SourcesArgs {
    /// JSON file overriding source base URLs.
    #[arg(long = "sources", value_name = "JSON")]
    pub sources: Option<PathBuf>,
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
