//! CLI argument parsing using clap derive

use blockworks_core::SortOrder;
use clap::{Parser, Subcommand};

/// BlockWorks - Manage blocks and the components they are built from
#[derive(Parser, Debug)]
#[command(name = "blockworks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "BLOCKWORKS_VERBOSE")]
    pub verbose: bool,

    /// Disable colored output (NO_COLOR is honored as well)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Start with an empty catalog instead of the default blocks
    #[arg(long, global = true)]
    pub empty: bool,

    /// The command to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu
    Menu,

    /// Show all blocks
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show blocks whose name contains a term (case-insensitive)
    Search {
        /// Text to look for in block names
        #[arg(default_value = "")]
        term: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show blocks sorted by name
    ///
    /// Examples:
    ///   blockworks sort              # A-Z
    ///   blockworks sort --order desc # Z-A
    Sort {
        /// Sort order: asc, desc, a-z or z-a
        #[arg(short, long, default_value = "asc")]
        order: SortOrder,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the suggested components offered when adding a block
    Components,
}
