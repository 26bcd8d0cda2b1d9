//! Command-line interface for rolodex.
//!
//! This module provides the CLI structure for the `rolo` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ClearCommand, ConfigCommand, EditCommand, ListCommand, OutputFormat,
    RemoveCommand, ShowCommand,
};

/// rolo - a local contact directory
///
/// Stores contact records (name, surname, phone, email) in a local database,
/// keyed by email address. Use the one-shot subcommands for scripting or
/// `rolo shell` for an interactive session.
#[derive(Debug, Parser)]
#[command(name = "rolo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

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
    /// Add a contact (or overwrite the one stored under the same email)
    Add(AddCommand),

    /// Edit a stored contact
    Edit(EditCommand),

    /// Remove a contact
    Remove(RemoveCommand),

    /// List all contacts
    List(ListCommand),

    /// Show a single contact
    Show(ShowCommand),

    /// Delete every stored contact
    Clear(ClearCommand),

    /// Start the interactive shell
    Shell,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
