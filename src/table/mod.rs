//! Ordered symbol table backed by a slab-allocated sorted chain.
//!
//! ## Architecture
//!
//! Entries form a singly linked list in strictly increasing key order:
//!
//! ```text
//! head (least key) -> entry2 -> entry3 -> tail (greatest key)
//! ```
//!
//! - **Slab-based storage**: nodes live in a pre-allocatable arena and link by
//!   `usize` slab key, never by reference
//! - **Cached positions**: the head and tail slab keys are tracked so the
//!   minimum and maximum are O(1) reads
//! - **No balancing**: the chain is deliberately flat; ordered queries walk it
//!
//! ## Components
//!
//! - [`OrderedListTable`]: the table with the full ordered-map operation set
//! - [`Keys`] / [`Iter`]: forward cursors over the chain
//! - `Node` (private): one entry plus its successor link
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | put / get / delete | O(n) |
//! | rank / select / floor / ceiling | O(n) |
//! | min / max | O(1) |
//! | delete_min | O(1) |
//! | delete_max | O(n) |
//!
//! ## Example
//!
//! ```
//! use ordlist::OrderedListTable;
//!
//! let mut table = OrderedListTable::with_capacity(16);
//! table.put("E", 1);
//! table.put("A", 2);
//!
//! assert_eq!(table.min(), Some(&"A"));
//! assert_eq!(table.select(1), Some(&"E"));
//! ```

pub mod iter;
pub mod ordered;

mod node;

pub(crate) use node::Node;

pub use iter::{Iter, Keys};
pub use ordered::OrderedListTable;
