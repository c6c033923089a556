//! Case-insensitive, stable ordering by name
//!
//! Names are compared after lowercasing, by code point. No locale or numeric
//! collation is applied. Both directions are stable: items whose names fold to
//! the same key keep their input order, so a descending sort is *not* the
//! reverse of an ascending one when ties exist.

use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use crate::block::Block;
use crate::error::Error;

/// Direction of a name sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// A-Z
    #[default]
    Ascending,
    /// Z-A
    Descending,
}

impl SortOrder {
    /// Short label used in menus.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending (A-Z)",
            SortOrder::Descending => "Descending (Z-A)",
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "asc" | "ascending" | "a-z" => Ok(SortOrder::Ascending),
            "2" | "desc" | "descending" | "z-a" => Ok(SortOrder::Descending),
            _ => Err(Error::InvalidOrder {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// Anything that can be ordered by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for Block {
    fn name(&self) -> &str {
        Block::name(self)
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Compare two names case-insensitively in the given direction.
pub fn compare_names(a: &str, b: &str, order: SortOrder) -> Ordering {
    let ord = a.to_lowercase().cmp(&b.to_lowercase());
    match order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}

/// Stable in-place sort of named items.
///
/// Each key is folded once, so the cost is one lowercase per item rather than
/// one per comparison.
pub fn sort_by_name<T: Named>(items: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Ascending => items.sort_by_cached_key(|item| item.name().to_lowercase()),
        SortOrder::Descending => {
            items.sort_by_cached_key(|item| Reverse(item.name().to_lowercase()))
        }
    }
}
