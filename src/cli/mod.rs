//! Command-line interface for flightboard.
//!
//! This module provides the CLI structure for the `fboard` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, ListCommand, LongestCommand, OutputFormat, RemoveCommand, UpdateCommand,
};

/// fboard - Inspect and transform flight rosters
///
/// Loads a JSON roster of flight records into an in-memory registry and
/// applies one operation per invocation: listing, status filtering,
/// longest-flight lookup, status update, or removal.
#[derive(Debug, Parser)]
#[command(name = "fboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the roster file (overrides the configured default)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the roster, optionally filtered by status
    List(ListCommand),

    /// Show the flight with the longest duration
    Longest(LongestCommand),

    /// Update the status of a flight
    Update(UpdateCommand),

    /// Remove a flight from the roster
    Remove(RemoveCommand),

    /// Run the built-in demonstration scenario
    Demo,

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
