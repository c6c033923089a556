//! BlockWorks CLI
//!
//! Console front end for the block catalog: an interactive menu plus a few
//! scriptable commands.

mod cli;
mod commands;
mod error;
mod interactive;
mod render;

use blockworks_core::BlockStore;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::{CliError, Result};
use interactive::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose)?;

    let mut store = if cli.empty {
        BlockStore::new()
    } else {
        BlockStore::with_seed()
    };
    tracing::debug!(blocks = store.len(), "Catalog ready");

    execute_command(cli.command.unwrap_or(Commands::Menu), &mut store)
}

fn execute_command(cmd: Commands, store: &mut BlockStore) -> Result<()> {
    match cmd {
        Commands::Menu => Session::new(store).run(),
        Commands::List { json } => commands::run_list(store, json),
        Commands::Search { term, json } => commands::run_search(store, &term, json),
        Commands::Sort { order, json } => commands::run_sort(store, order, json),
        Commands::Components => commands::run_components(),
    }
}

/// Install the tracing subscriber.
///
/// Logs go to stderr so they never interleave with menu output. `--verbose`
/// forces debug level; otherwise `RUST_LOG` is used, defaulting to warnings.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
    Ok(())
}
