//! Block and component data model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named part required to build a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component name, stored case-exact (e.g. "Steel Plates")
    pub name: String,
    /// Required quantity, always greater than zero
    pub quantity: u32,
}

impl Component {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A catalog entry: a unique name and the components it is built from.
///
/// Components keep the order they were supplied in. A `Block` built through
/// [`Block::new`] never holds a zero quantity, a blank component name, or the
/// same component twice. Deserialization goes through [`Block::new`] as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BlockRecord")]
pub struct Block {
    name: String,
    components: Vec<Component>,
}

/// Unchecked wire shape of a [`Block`]
#[derive(Deserialize)]
struct BlockRecord {
    name: String,
    components: Vec<Component>,
}

impl TryFrom<BlockRecord> for Block {
    type Error = Error;

    fn try_from(record: BlockRecord) -> Result<Self> {
        Block::new(
            &record.name,
            record.components.into_iter().map(|c| (c.name, c.quantity)),
        )
    }
}

impl Block {
    /// Build a block, normalizing its input.
    ///
    /// The name is trimmed. Components with a zero quantity or a blank name are
    /// dropped; a repeated component name keeps its first position and takes
    /// the last quantity given.
    ///
    /// # Errors
    /// * [`Error::EmptyName`] if the trimmed name is empty
    /// * [`Error::NoComponents`] if nothing is left after dropping entries
    pub fn new<I, S>(name: &str, components: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let mut kept: Vec<Component> = Vec::new();
        for (component, quantity) in components {
            let component = component.into();
            if quantity == 0 || component.trim().is_empty() {
                continue;
            }
            match kept.iter_mut().find(|c| c.name == component) {
                Some(existing) => existing.quantity = quantity,
                None => kept.push(Component::new(component, quantity)),
            }
        }

        if kept.is_empty() {
            return Err(Error::NoComponents {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            components: kept,
        })
    }

    /// Block name as stored (trimmed, original casing).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Quantity of a component by exact name.
    pub fn quantity(&self, component: &str) -> Option<u32> {
        self.components
            .iter()
            .find(|c| c.name == component)
            .map(|c| c.quantity)
    }

    /// Whether this block's name equals `name`, ignoring case and surrounding whitespace.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Whether this block's name contains `term`, ignoring case.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
