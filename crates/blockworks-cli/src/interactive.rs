//! Interactive menu session
//!
//! Uses dialoguer for prompts. Raw input is validated here before it reaches
//! the store, so the store only ever sees typed arguments.

use std::io::{IsTerminal, Write};

use blockworks_core::{Block, BlockStore, Error as CoreError, SUGGESTED_COMPONENTS, SortOrder};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::render;

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Search,
    Add,
    Delete,
    Sort,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::View,
        MenuChoice::Search,
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Sort,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::View => "View All Blocks",
            MenuChoice::Search => "Search Blocks",
            MenuChoice::Add => "Add Blocks",
            MenuChoice::Delete => "Delete Blocks",
            MenuChoice::Sort => "Sort Blocks",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Parse a quantity typed by the user.
///
/// Zero is allowed and means "not needed"; the caller drops it.
pub fn parse_quantity(input: &str) -> std::result::Result<u32, String> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number for the quantity.".to_string())?;
    if value < 0 {
        return Err("Quantity cannot be negative. Please try again.".to_string());
    }
    u32::try_from(value).map_err(|_| format!("Quantity cannot exceed {}.", u32::MAX))
}

/// Check a new block name before asking for components.
///
/// Mirrors the first two checks of [`BlockStore::add`] so the user is not
/// walked through every component prompt for a name that will be refused.
pub fn validate_new_name(store: &BlockStore, name: &str) -> blockworks_core::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::EmptyName);
    }
    if store.contains(name) {
        return Err(CoreError::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// What answering an add or delete confirmation did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Deleted(String),
    Declined,
    Rejected(CoreError),
}

impl Outcome {
    fn print(&self, declined: &str) {
        match self {
            Outcome::Added(name) => println!(
                "{} Block '{}' has been added.",
                "OK".green().bold(),
                name.cyan()
            ),
            Outcome::Deleted(name) => println!(
                "{} Block '{}' has been deleted.",
                "OK".green().bold(),
                name.cyan()
            ),
            Outcome::Declined => println!("{}", declined),
            Outcome::Rejected(e) => report(e),
        }
    }
}

/// Add the block if the user confirmed; a declined add touches nothing.
pub fn finish_add(
    store: &mut BlockStore,
    name: &str,
    components: Vec<(String, u32)>,
    confirmed: bool,
) -> Outcome {
    if !confirmed {
        return Outcome::Declined;
    }
    match store.add(name, components) {
        Ok(block) => Outcome::Added(block.name().to_string()),
        Err(e) => Outcome::Rejected(e),
    }
}

/// Delete the block if the user confirmed; a declined delete touches nothing.
pub fn finish_delete(store: &mut BlockStore, name: &str, confirmed: bool) -> Outcome {
    if !confirmed {
        return Outcome::Declined;
    }
    match store.delete_by_exact_name(name) {
        Ok(removed) => Outcome::Deleted(removed.name().to_string()),
        Err(e) => Outcome::Rejected(e),
    }
}

/// Sort by the text typed at the sort prompt ("1", "2", "asc", "z-a", ...).
///
/// An unrecognised choice is [`CoreError::InvalidOrder`] and leaves the order as it was.
pub fn sort_by_choice<'s>(
    store: &'s mut BlockStore,
    choice: &str,
) -> blockworks_core::Result<&'s [Block]> {
    let order: SortOrder = choice.parse()?;
    Ok(store.sort(order))
}

/// Interactive session over a store
pub struct Session<'a> {
    store: &'a mut BlockStore,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a mut BlockStore) -> Self {
        Self { store }
    }

    /// Show the splash screen and loop over the main menu until Exit.
    pub fn run(&mut self) -> Result<()> {
        splash_screen()?;

        loop {
            clear_screen()?;
            let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
            println!("{}", render::header("BlockWorks Main Menu"));
            let index = Select::new()
                .with_prompt("Enter your choice")
                .items(&labels)
                .default(0)
                .interact()?;

            let choice = MenuChoice::ALL[index];
            tracing::debug!(?choice, "Menu selection");
            match choice {
                MenuChoice::View => self.view()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::Add => self.add()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Sort => self.sort()?,
                MenuChoice::Exit => {
                    println!("Exiting BlockWorks. Goodbye!");
                    return Ok(());
                }
            }
        }
    }

    fn view(&mut self) -> Result<()> {
        clear_screen()?;
        println!("{}", render::format_block_list(self.store.list()));
        pause()
    }

    fn search(&mut self) -> Result<()> {
        let term: String = Input::new()
            .with_prompt("Enter the name of the block to search for")
            .allow_empty(true)
            .interact_text()?;

        let found = self.store.search(&term);
        if found.is_empty() {
            println!("No matching blocks found.");
        } else {
            clear_screen()?;
            println!("{}", render::format_block_list(found));
        }
        pause()
    }

    fn add(&mut self) -> Result<()> {
        let name: String = Input::new()
            .with_prompt("Enter the name of the new block")
            .allow_empty(true)
            .interact_text()?;

        if let Err(e) = validate_new_name(self.store, &name) {
            report(&e);
            return pause();
        }

        let mut components: Vec<(String, u32)> = Vec::new();
        for component in SUGGESTED_COMPONENTS {
            let raw: String = Input::new()
                .with_prompt(format!("Enter the quantity for {}", component))
                .validate_with(|s: &String| parse_quantity(s).map(|_| ()))
                .interact_text()?;
            let quantity = parse_quantity(&raw).map_err(crate::error::CliError::user)?;
            components.push((component.to_string(), quantity));
        }

        let preview = match Block::new(&name, components.clone()) {
            Ok(block) => block,
            Err(e) => {
                report(&e);
                println!("The block will not be added.");
                return pause();
            }
        };

        clear_screen()?;
        println!("{}", render::format_block_list([&preview]));

        let confirmed = Confirm::new()
            .with_prompt("Do you want to add this block to the list?")
            .default(true)
            .interact()?;

        finish_add(self.store, &name, components, confirmed).print("Block was not added.");
        pause()
    }

    fn delete(&mut self) -> Result<()> {
        let name: String = Input::new()
            .with_prompt("Enter the exact name of the block to delete")
            .allow_empty(true)
            .interact_text()?;

        if name.trim().is_empty() {
            report(&CoreError::EmptyName);
            return pause();
        }

        let Some(found) = self.store.get(&name) else {
            report(&CoreError::NotFound {
                name: name.trim().to_string(),
            });
            return pause();
        };

        clear_screen()?;
        println!("{}", render::format_block_list([found]));
        let prompt = format!("Are you sure you want to delete the block '{}'?", found.name());

        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;

        finish_delete(self.store, &name, confirmed).print("Block not deleted.");
        pause()
    }

    fn sort(&mut self) -> Result<()> {
        println!("Choose sort order:");
        println!("1. {}", SortOrder::Ascending.label());
        println!("2. {}", SortOrder::Descending.label());

        let raw: String = Input::new()
            .with_prompt("Enter your choice")
            .allow_empty(true)
            .interact_text()?;

        match sort_by_choice(self.store, &raw) {
            Ok(sorted) => {
                clear_screen()?;
                println!("{}", render::format_block_list(sorted));
            }
            Err(e) => report(&e),
        }
        pause()
    }
}

fn report(error: &CoreError) {
    println!("{} {}", "error:".red().bold(), error);
}

fn splash_screen() -> Result<()> {
    clear_screen()?;
    let wide = "=".repeat(50);
    println!("{}", wide);
    println!(
        "{}",
        format!("{:^50}", "Welcome to BlockWorks").white().bold().on_red()
    );
    println!("{}", wide);
    println!(
        "{}",
        format!("{:^50}", "A Program for Managing Blocks and Components")
            .cyan()
            .bold()
    );
    println!();
    println!("  {}", "Loading...".yellow().bold());
    println!("{}", wide);
    Input::<String>::new()
        .with_prompt("Press Enter to continue to the main menu")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn pause() -> Result<()> {
    Input::<String>::new()
        .with_prompt("Press Enter to return to the menu")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn clear_screen() -> Result<()> {
    let mut stdout = std::io::stdout();
    if stdout.is_terminal() {
        write!(stdout, "\x1B[2J\x1B[1;1H")?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_menu_has_six_entries_ending_in_exit() {
        assert_eq!(MenuChoice::ALL.len(), 6);
        assert_eq!(MenuChoice::ALL[0].label(), "View All Blocks");
        assert_eq!(MenuChoice::ALL[5], MenuChoice::Exit);
    }

    #[rstest]
    #[case("0", Ok(0))]
    #[case(" 12 ", Ok(12))]
    #[case("100", Ok(100))]
    fn test_parse_quantity_accepts(#[case] input: &str, #[case] expected: std::result::Result<u32, String>) {
        assert_eq!(parse_quantity(input), expected);
    }

    #[rstest]
    #[case("-1", "negative")]
    #[case("abc", "valid number")]
    #[case("", "valid number")]
    #[case("1.5", "valid number")]
    #[case("99999999999", "exceed")]
    fn test_parse_quantity_rejects(#[case] input: &str, #[case] message: &str) {
        let err = parse_quantity(input).unwrap_err();
        assert!(err.contains(message), "{} should mention {}", err, message);
    }

    fn components(entries: &[(&str, u32)]) -> Vec<(String, u32)> {
        entries.iter().map(|(n, q)| (n.to_string(), *q)).collect()
    }

    #[test]
    fn test_declined_add_leaves_store_unchanged() {
        let mut store = BlockStore::with_seed();
        let before = store.list().to_vec();

        let outcome = finish_add(&mut store, "Refinery", components(&[("Motors", 4)]), false);

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_confirmed_add_appends_block() {
        let mut store = BlockStore::with_seed();

        let outcome = finish_add(
            &mut store,
            " Refinery ",
            components(&[("Steel Plates", 40), ("Display", 0)]),
            true,
        );

        assert_eq!(outcome, Outcome::Added("Refinery".into()));
        assert_eq!(store.len(), 6);
        let added = store.list().last().unwrap();
        assert_eq!(added.name(), "Refinery");
        assert_eq!(added.quantity("Display"), None);
    }

    #[test]
    fn test_confirmed_add_still_reports_store_errors() {
        let mut store = BlockStore::with_seed();

        let outcome = finish_add(&mut store, "MEDBAY", components(&[("Motors", 1)]), true);

        assert_eq!(
            outcome,
            Outcome::Rejected(CoreError::DuplicateName {
                name: "MEDBAY".into()
            })
        );
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_declined_delete_leaves_store_unchanged() {
        let mut store = BlockStore::with_seed();
        let before = store.list().to_vec();

        let outcome = finish_delete(&mut store, "medbay", false);

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_confirmed_delete_removes_block() {
        let mut store = BlockStore::with_seed();

        let outcome = finish_delete(&mut store, " medbay ", true);

        assert_eq!(outcome, Outcome::Deleted("Medbay".into()));
        assert_eq!(store.len(), 4);
        assert!(!store.contains("Medbay"));
        assert_eq!(
            finish_delete(&mut store, "Medbay", true),
            Outcome::Rejected(CoreError::NotFound {
                name: "Medbay".into()
            })
        );
    }

    #[rstest]
    #[case("2", "Reactor (Small)")]
    #[case(" z-a ", "Reactor (Small)")]
    #[case("1", "Assembler")]
    fn test_sort_by_choice(#[case] choice: &str, #[case] first: &str) {
        let mut store = BlockStore::with_seed();
        let sorted = sort_by_choice(&mut store, choice).unwrap();
        assert_eq!(sorted[0].name(), first);
        assert_eq!(store.list()[0].name(), first);
    }

    #[test]
    fn test_sort_by_unknown_choice_keeps_order() {
        let mut store = BlockStore::with_seed();
        let before = store.list().to_vec();

        let err = sort_by_choice(&mut store, "3").unwrap_err();

        assert_eq!(err, CoreError::InvalidOrder { value: "3".into() });
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_validate_new_name() {
        let store = BlockStore::with_seed();
        assert_eq!(validate_new_name(&store, "  "), Err(CoreError::EmptyName));
        assert_eq!(
            validate_new_name(&store, "assembler"),
            Err(CoreError::DuplicateName {
                name: "assembler".into()
            })
        );
        assert!(validate_new_name(&store, "Refinery").is_ok());
    }
}
