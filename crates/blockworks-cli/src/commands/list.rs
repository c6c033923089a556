//! List, search and component catalog commands

use blockworks_core::{Block, BlockStore, SUGGESTED_COMPONENTS};
use colored::Colorize;

use crate::error::Result;
use crate::render;

/// Print blocks either as the rendered list or as pretty JSON.
pub(crate) fn print_blocks(blocks: &[&Block], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(blocks)?);
    } else {
        println!("{}", render::format_block_list(blocks.iter().copied()));
    }
    Ok(())
}

/// Run the list command
pub fn run_list(store: &BlockStore, json: bool) -> Result<()> {
    let blocks: Vec<&Block> = store.list().iter().collect();
    print_blocks(&blocks, json)
}

/// Run the search command
pub fn run_search(store: &BlockStore, term: &str, json: bool) -> Result<()> {
    let found = store.search(term);
    if found.is_empty() && !json {
        println!("No matching blocks found.");
        return Ok(());
    }
    print_blocks(&found, json)
}

/// Run the components command
pub fn run_components() -> Result<()> {
    println!("{}", "Suggested Components".bold());
    println!();
    for component in SUGGESTED_COMPONENTS {
        println!("  {}", component.cyan());
    }
    println!();
    println!(
        "{} {} components. Any other name is accepted too.",
        "Total:".dimmed(),
        SUGGESTED_COMPONENTS.len()
    );
    Ok(())
}
