//! CLI argument parsing for lastmod
//!
//! Global flags: --root, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod config;
pub mod format;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ShowArgs, StampArgs};
pub use config::ConfigCommands;
pub use output::OutputFormat;

/// lastmod - keep a last-modified timestamp log in markdown frontmatter
#[derive(Parser, Debug)]
#[command(name = "lastmod")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root directory (defaults to the current directory)
    #[arg(long, global = true, env = "LASTMOD_ROOT")]
    pub root: Option<PathBuf>,

    /// Explicit config file, bypassing vault and global lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `lastmod_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a vault config with default settings
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Record a modification of one or more documents
    Stamp(StampArgs),

    /// Show a document's timestamp log
    Show(ShowArgs),

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
