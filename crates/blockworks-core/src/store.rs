//! Block store - the ordered catalog and its invariants

use crate::block::Block;
use crate::error::{Error, Result};
use crate::seed::seed_blocks;
use crate::sort::{SortOrder, sort_by_name};

/// Ordered collection of blocks.
///
/// Blocks stay in insertion order until [`BlockStore::sort`] reorders them.
/// No two blocks share a name under case-insensitive comparison. Every
/// operation that fails leaves the collection exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: Vec<Block>,
}

impl BlockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a store holding the default catalog.
    pub fn with_seed() -> Self {
        let store = Self {
            blocks: seed_blocks(),
        };
        tracing::debug!(count = store.len(), "Seeded block store");
        store
    }

    /// All blocks in current order.
    pub fn list(&self) -> &[Block] {
        &self.blocks
    }

    /// Blocks whose name contains `term`, ignoring case.
    ///
    /// An empty term matches every block. Results keep collection order.
    pub fn search(&self, term: &str) -> Vec<&Block> {
        let found: Vec<&Block> = self
            .blocks
            .iter()
            .filter(|b| b.name_contains(term))
            .collect();
        tracing::trace!(term, matches = found.len(), "Searched blocks");
        found
    }

    /// Look up a block by exact name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.is_named(name))
    }

    /// Check whether a block with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a new block.
    ///
    /// Checks run in this order: empty name, duplicate name, then components.
    /// Zero quantities are discarded before the component check.
    ///
    /// # Errors
    /// * [`Error::EmptyName`] if `name` is blank
    /// * [`Error::DuplicateName`] if a block with the same name (ignoring case) exists
    /// * [`Error::NoComponents`] if no component has a positive quantity
    pub fn add<I, S>(&mut self, name: &str, components: I) -> Result<&Block>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            tracing::debug!("Rejected block with empty name");
            return Err(Error::EmptyName);
        }
        if self.contains(trimmed) {
            tracing::debug!(name = trimmed, "Rejected duplicate block name");
            return Err(Error::DuplicateName {
                name: trimmed.to_string(),
            });
        }

        let block = Block::new(trimmed, components).inspect_err(|e| {
            tracing::debug!(name = trimmed, "Rejected block: {}", e);
        })?;

        tracing::debug!(
            name = block.name(),
            components = block.components().len(),
            "Added block"
        );
        self.blocks.push(block);
        Ok(&self.blocks[self.blocks.len() - 1])
    }

    /// Remove the block whose name matches exactly, ignoring case and
    /// surrounding whitespace, and return it.
    ///
    /// # Errors
    /// * [`Error::NotFound`] if no block matches
    pub fn delete_by_exact_name(&mut self, name: &str) -> Result<Block> {
        let Some(index) = self.blocks.iter().position(|b| b.is_named(name)) else {
            tracing::debug!(name = name.trim(), "No block to delete");
            return Err(Error::NotFound {
                name: name.trim().to_string(),
            });
        };

        let removed = self.blocks.remove(index);
        tracing::debug!(name = removed.name(), "Deleted block");
        Ok(removed)
    }

    /// Reorder the collection by name and return the new order.
    ///
    /// The new order is kept: later calls to [`BlockStore::list`] see it.
    pub fn sort(&mut self, order: SortOrder) -> &[Block] {
        sort_by_name(&mut self.blocks, order);
        tracing::debug!(%order, count = self.blocks.len(), "Sorted blocks");
        &self.blocks
    }
}
