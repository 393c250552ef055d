//! CLI argument structures
//!
//! This module defines the command-line interface of arraylab.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse and run a catalog of array and object utilities
#[derive(Parser)]
#[command(name = "arraylab")]
#[command(about = "arraylab - Array & Object Processing Problems", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv adds line numbers)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a configuration file (defaults to ./arraylab.toml when present)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the catalog questions
    List,

    /// Show the catalog with one entry expanded
    Show {
        /// Entry number (1-20)
        entry: usize,
    },

    /// Browse the catalog interactively, toggling entries by number
    Browse,

    /// Run a utility function on JSON arguments
    #[command(name = "run")]
    Run {
        /// Function name, e.g. chunkArray
        function: String,

        /// Arguments as JSON literals, e.g. '[1,2,3]' 2
        #[arg(value_name = "JSON", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the available utility functions
    Functions,
}
