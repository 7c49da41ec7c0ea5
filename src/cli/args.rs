//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for curlpy.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_DIR_ENV;

/// curlpy - Convert curl commands into Python requests code
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "curlpy", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // POSITIONAL ARGUMENTS
    // =========================================================================

    /// The curl command to convert (read from stdin when omitted)
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    // =========================================================================
    // CONVERSION
    // =========================================================================

    /// Print the conversion outcome as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Only check that the command is convertible
    #[arg(long = "check", action = ArgAction::SetTrue)]
    pub check: bool,

    /// Do not record this conversion in the history
    #[arg(long = "no-history", action = ArgAction::SetTrue)]
    pub no_history: bool,

    /// Attribute conversions to this owner id and restrict history queries to it
    #[arg(long = "owner", value_name = "ID")]
    pub owner: Option<u64>,

    // =========================================================================
    // HISTORY
    // =========================================================================

    /// List recent conversions
    #[arg(long = "history", action = ArgAction::SetTrue, conflicts_with_all = ["show", "delete", "stats", "check"])]
    pub history: bool,

    /// Maximum number of history entries to list
    #[arg(long = "limit", value_name = "N", requires = "history")]
    pub limit: Option<usize>,

    /// Show one recorded conversion
    #[arg(long = "show", value_name = "ID", conflicts_with_all = ["delete", "stats", "check"])]
    pub show: Option<u64>,

    /// Delete one recorded conversion
    #[arg(long = "delete", value_name = "ID", conflicts_with_all = ["stats", "check"])]
    pub delete: Option<u64>,

    /// Print conversion statistics
    #[arg(long = "stats", action = ArgAction::SetTrue, conflicts_with = "check")]
    pub stats: bool,

    // =========================================================================
    // CONFIGURATION & LOGGING
    // =========================================================================

    /// Configuration directory (holds config.toml and history.json)
    #[arg(long = "config-dir", value_name = "DIR", env = CONFIG_DIR_ENV)]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Print debugging information
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Args {
    /// Whether the invocation works on the history rather than converting
    pub fn is_history_query(&self) -> bool {
        self.history || self.show.is_some() || self.delete.is_some() || self.stats
    }
}

/// Log format for structured output (CI/CD)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
