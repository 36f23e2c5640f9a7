//! # ordlist
//!
//! Ordered symbol table backed by a slab-allocated sorted linked list.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Table**: [`OrderedListTable`], a key→value store whose entries form a
//!   singly linked chain in strictly increasing key order
//! - **Errors**: [`TableError`] for the few operations that can actually fail
//!
//! ## Design Principles
//!
//! 1. **Flat ordered chain**: No balancing. Search, insert, and delete are O(n);
//!    minimum access is O(1) through a cached head position
//! 2. **Arena-indexed links**: Nodes live in a `Slab` and link by integer key,
//!    never by reference, so splicing the chain involves no aliasing
//! 3. **Absence is not an error**: Missing keys and out-of-range ranks produce
//!    `Option::None` or a no-op, never an `Err`
//! 4. **Synchronous Execution**: Every operation runs to completion; there is
//!    no internal locking and no suspension point
//!
//! ## Example
//!
//! ```
//! use ordlist::OrderedListTable;
//!
//! let mut table = OrderedListTable::new();
//! for (i, key) in ["S", "E", "A", "R", "C", "H"].iter().enumerate() {
//!     table.put(*key, i);
//! }
//!
//! assert_eq!(table.min(), Some(&"A"));
//! assert_eq!(table.rank(&"E"), 2);
//! assert_eq!(table.floor(&"D"), Some(&"C"));
//! let keys: Vec<_> = table.keys().copied().collect();
//! assert_eq!(keys, ["A", "C", "E", "H", "R", "S"]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy: Underflow, InvalidArgument
pub mod error;

/// Ordered symbol table: slab-backed sorted chain
pub mod table;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{Result, TableError};
pub use table::{Iter, Keys, OrderedListTable};
