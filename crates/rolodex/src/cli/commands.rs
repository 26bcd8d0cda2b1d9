//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Given name
    #[arg(long)]
    pub name: String,

    /// Family name
    #[arg(long)]
    pub surname: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Email address (the contact's unique key)
    #[arg(long)]
    pub email: String,
}

/// Edit command arguments.
///
/// Loads the contact stored under EMAIL into the form, applies the provided
/// overrides, and saves.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Email of the contact to edit
    pub email: String,

    /// New given name
    #[arg(long)]
    pub name: Option<String>,

    /// New family name
    #[arg(long)]
    pub surname: Option<String>,

    /// New phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// New email address (re-keys the contact)
    #[arg(long)]
    pub new_email: Option<String>,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Email of the contact to remove
    pub email: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Email of the contact to show
    pub email: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Clear command arguments.
#[derive(Debug, Args)]
pub struct ClearCommand {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
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

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One text card per contact
    #[default]
    Plain,
    /// Aligned table
    Table,
    /// JSON snapshot
    Json,
}
