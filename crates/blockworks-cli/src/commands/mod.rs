//! Non-interactive command implementations for blockworks-cli

pub mod list;
pub mod sort;

pub use list::{run_components, run_list, run_search};
pub use sort::run_sort;
