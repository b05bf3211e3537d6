//! CLI argument definitions for the sales pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sales-pipeline",
    version,
    about = "Bronze, silver and gold tables for raw sales exports",
    long_about = "Ingest raw sales CSV exports into a bronze table, clean them into a\n\
                  silver table with a rejection set, and aggregate gold reporting tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Warehouse directory holding the bronze, silver and gold tables.
    #[arg(
        long = "warehouse",
        value_name = "DIR",
        default_value = "warehouse",
        global = true
    )]
    pub warehouse: PathBuf,

    /// JSON file overriding the canonical vocabularies.
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

    /// Allow customer values (ids, emails) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append raw CSV exports to the bronze table.
    Bronze(BronzeArgs),

    /// Rebuild the silver table from the whole bronze table.
    Silver(SilverArgs),

    /// Rebuild the gold tables from the silver table.
    Gold,

    /// Run every stage; bronze only when sources are given.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct BronzeArgs {
    /// Source CSV files, ingested in the order given.
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct SilverArgs {
    /// Print the rejected records after the summary.
    #[arg(long = "show-rejections")]
    pub show_rejections: bool,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Source CSV files to ingest before cleaning.
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,

    /// Print the rejected records after the summary.
    #[arg(long = "show-rejections")]
    pub show_rejections: bool,
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
