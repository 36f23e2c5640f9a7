//! Table node for slab-based storage.
//!
//! ## Design
//!
//! `Node` couples one key/value entry with the slab key of its successor in
//! ascending key order. Nodes never hold references to each other; the chain
//! is spliced by rewriting `usize` links, so unlinking an entry is a matter of
//! bypassing one index.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

/// One table entry stored in the slab.
///
/// Holds the key/value pair plus the forward link for the sorted chain.
/// The link is a slab key (`usize`), not a direct reference.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Entry key, unique within the table
    pub(crate) key: K,

    /// Entry payload, opaque to the table
    pub(crate) value: V,

    /// Successor in ascending key order (slab key)
    /// None if this is the tail (greatest key)
    pub(crate) next: Option<usize>,
}

impl<K, V> Node<K, V> {
    /// Create a new node (not yet linked into the chain)
    #[inline]
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            next: None,
        }
    }

    /// Consume the node, yielding its entry
    #[inline]
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new_is_unlinked() {
        let node = Node::new("key", 42);

        assert_eq!(node.key, "key");
        assert_eq!(node.value, 42);
        assert!(node.next.is_none());
    }

    #[test]
    fn test_node_into_entry() {
        let mut node = Node::new("key", 42);
        node.next = Some(7);

        // The link is dropped with the node; only the entry survives
        assert_eq!(node.into_entry(), ("key", 42));
    }
}
