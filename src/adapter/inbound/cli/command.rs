//! Command-line interface definitions.
//!
//! Defines the CLI structure for the propedge application using `clap`.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Baseball player-prop +EV scanner
#[derive(Parser, Debug)]
#[command(name = "propedge")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity (-v info logs, -vv debug logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the propedge CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare competing books against the no-vig reference line
    Scan(ScanArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// List the market vocabulary
    Markets(ConfigPathArg),
}

/// Subcommands for `propedge config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that only need a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: ./propedge.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file [default: ./propedge.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `scan` subcommand.
///
/// Every flag overrides the matching config value for this run only.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to the configuration file [default: ./propedge.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum EV% a bet must exceed
    #[arg(long)]
    pub threshold: Option<Decimal>,

    /// Reference snapshot file
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Competing books, comma-separated (e.g. fanduel,draftkings)
    #[arg(long, value_delimiter = ',')]
    pub books: Option<Vec<String>>,

    /// List records that could not be priced
    #[arg(long)]
    pub show_skipped: bool,

    /// Log level override (e.g. debug, info, warn)
    #[arg(long)]
    pub log_level: Option<String>,
}
