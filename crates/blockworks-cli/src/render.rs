//! Text rendering for blocks and menus

use blockworks_core::Block;
use colored::Colorize;

/// Width of the separator rules
pub const RULE_WIDTH: usize = 30;

/// A line of `=` the width of the block list.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Boxed title used at the top of each screen.
pub fn header(title: &str) -> String {
    format!(
        "{}\n{}\n{}",
        rule(),
        format!("{:^width$}", title, width = RULE_WIDTH)
            .white()
            .bold()
            .on_red(),
        rule()
    )
}

/// One block with its components, closed by a rule.
pub fn format_block(block: &Block) -> String {
    let mut out = format!("Block: {}\n{}\n", block.name().yellow().bold(), "-".repeat(RULE_WIDTH));
    for component in block.components() {
        out.push_str(&format!(
            "  {}: {}\n",
            component.name.cyan(),
            component.quantity.to_string().green()
        ));
    }
    out.push_str(&rule());
    out
}

/// A titled list of blocks, or a notice when there are none.
pub fn format_block_list<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> String {
    let mut out = header("Block List");
    let mut any = false;
    for block in blocks {
        any = true;
        out.push('\n');
        out.push_str(&format_block(block));
    }
    if !any {
        out.push_str("\nNo blocks available.");
    }
    out
}
