//! Block catalog core for BlockWorks.
//!
//! This crate owns the in-memory catalog of blocks and the rules that keep it
//! consistent. The console front end lives in `blockworks-cli` and only ever
//! talks to the catalog through [`BlockStore`].
//!
//! # Layout
//!
//! - [`block`]: the `Block` / `Component` data model
//! - [`store`]: `BlockStore`, the ordered collection with add/delete/search/sort
//! - [`sort`]: the stable, case-insensitive name ordering used by the store
//! - [`seed`]: the default catalog and the suggested component list
//!
//! # Example
//!
//! ```
//! use blockworks_core::{BlockStore, SortOrder};
//!
//! let mut store = BlockStore::with_seed();
//! store.add("Refinery", [("Steel Plates", 40), ("Motors", 8)]).unwrap();
//!
//! let names: Vec<_> = store.sort(SortOrder::Ascending).iter().map(|b| b.name()).collect();
//! assert_eq!(names.first(), Some(&"Assembler"));
//! assert_eq!(names.last(), Some(&"Refinery"));
//! ```

pub mod block;
pub mod error;
pub mod seed;
pub mod sort;
pub mod store;

pub use block::{Block, Component};
pub use error::{Error, Result};
pub use seed::{SEED_BLOCKS, SUGGESTED_COMPONENTS, seed_blocks};
pub use sort::{Named, SortOrder, compare_names, sort_by_name};
pub use store::BlockStore;
