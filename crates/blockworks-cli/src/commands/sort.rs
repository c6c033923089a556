//! Sort command

use blockworks_core::{Block, BlockStore, SortOrder};

use crate::commands::list::print_blocks;
use crate::error::Result;

/// Run the sort command
pub fn run_sort(store: &mut BlockStore, order: SortOrder, json: bool) -> Result<()> {
    let sorted: Vec<&Block> = store.sort(order).iter().collect();
    print_blocks(&sorted, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_reorders_store() {
        let mut store = BlockStore::with_seed();
        run_sort(&mut store, SortOrder::Descending, true).unwrap();
        assert_eq!(store.list()[0].name(), "Reactor (Small)");
    }
}
