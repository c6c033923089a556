//! Default catalog contents - the state a fresh session starts in.

use crate::block::Block;

/// Seed table: block name and its components, in display order.
pub const SEED_BLOCKS: &[(&str, &[(&str, u32)])] = &[
    (
        "Assembler",
        &[
            ("Steel Plates", 10),
            ("Motors", 5),
            ("Computers", 5),
            ("Display", 3),
            ("Construction Components", 20),
            ("Large Steel Tube", 1),
        ],
    ),
    (
        "Reactor (Small)",
        &[
            ("Steel Plates", 20),
            ("Power Cells", 10),
            ("Computers", 5),
            ("Construction Components", 5),
            ("Reactor Components", 1),
        ],
    ),
    (
        "Large Cargo Container",
        &[
            ("Steel Plates", 60),
            ("Construction Components", 10),
            ("Interior Plates", 5),
            ("Motors", 4),
            ("Large Steel Tubes", 2),
            ("Computers", 1),
        ],
    ),
    (
        "Oxygen Generator",
        &[
            ("Steel Plates", 15),
            ("Computers", 5),
            ("Interior Plates", 2),
            ("Motors", 5),
            ("Large Steel Tube", 1),
            ("Construction Components", 5),
        ],
    ),
    (
        "Medbay",
        &[
            ("Steel Plates", 100),
            ("Computers", 10),
            ("Motors", 10),
            ("Construction Components", 5),
            ("Medical Components", 5),
            ("Display", 5),
            ("Interior Plates", 3),
        ],
    ),
];

/// Components offered when building a new block interactively.
///
/// Only a suggestion: the store accepts any component name.
pub const SUGGESTED_COMPONENTS: &[&str] = &[
    "Steel Plates",
    "Motors",
    "Computers",
    "Display",
    "Construction Components",
    "Large Steel Tube",
    "Small Steel Tube",
    "Power Cells",
    "Reactor Components",
    "Interior Plates",
    "Medical Components",
];

/// Build the seed blocks from [`SEED_BLOCKS`].
pub fn seed_blocks() -> Vec<Block> {
    SEED_BLOCKS
        .iter()
        .filter_map(|(name, components)| {
            let block = Block::new(name, components.iter().copied());
            if let Err(e) = &block {
                tracing::warn!("Skipping invalid seed block {}: {}", name, e);
            }
            block.ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seed_row_becomes_a_block() {
        assert_eq!(seed_blocks().len(), SEED_BLOCKS.len());
    }

    #[test]
    fn test_seed_preserves_component_order() {
        let blocks = seed_blocks();
        let assembler: Vec<_> = blocks[0].components().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            assembler,
            vec![
                "Steel Plates",
                "Motors",
                "Computers",
                "Display",
                "Construction Components",
                "Large Steel Tube",
            ]
        );
    }

    #[test]
    fn test_suggested_components_are_unique() {
        let mut names = SUGGESTED_COMPONENTS.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SUGGESTED_COMPONENTS.len());
    }
}
