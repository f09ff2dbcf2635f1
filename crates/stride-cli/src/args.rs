use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, WeekCommands};

/// Main command-line interface for the Stride training plan tracker
///
/// Stride follows multi-week training plans from a catalog and tracks how far
/// along you are, combining the weeks you mark as done with the calendar time
/// since you started. It can also run as an MCP (Model Context Protocol)
/// server so AI assistants can read and update your progress.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON plan catalog. Defaults to
    /// $XDG_CONFIG_HOME/stride/catalog.json, then the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stride CLI
///
/// - `plan`: Browse plans and start, reset or follow their progress
/// - `week`: Move the current week and mark weeks done or undone
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Browse plans and manage their progress
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Update weeks within a started plan
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Start the MCP server
    Serve,
}
