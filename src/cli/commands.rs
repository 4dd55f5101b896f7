//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use clap::{Args, Subcommand, ValueEnum};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show flights with this status (e.g. ON_TIME, DELAYED, CANCELLED)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Output format (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Longest command arguments.
#[derive(Debug, Args)]
pub struct LongestCommand {
    /// Output format (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// The flight number to update
    pub flight_number: String,

    /// The new status
    pub status: String,

    /// Output format (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// The flight number to remove
    pub flight_number: String,

    /// Output format (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}
