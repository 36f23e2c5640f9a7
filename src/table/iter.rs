//! Forward cursors over the sorted chain.
//!
//! ## Design
//!
//! A cursor is a borrowed view of the node arena plus the slab key of the next
//! entry to yield. Each call to [`OrderedListTable::keys`] or
//! [`OrderedListTable::iter`] creates a fresh cursor starting at the head, so
//! independent traversals over the same table do not interfere; an exhausted
//! cursor stays exhausted.
//!
//! Because a cursor borrows the table, the borrow checker rejects structural
//! mutation while one is live. No snapshot isolation is needed.
//!
//! [`OrderedListTable::keys`]: super::OrderedListTable::keys
//! [`OrderedListTable::iter`]: super::OrderedListTable::iter

use std::iter::FusedIterator;

use slab::Slab;

use crate::table::Node;

/// Iterator over the keys of an `OrderedListTable` in ascending order.
///
/// Created by [`OrderedListTable::keys`](super::OrderedListTable::keys).
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    /// The table's node arena
    nodes: &'a Slab<Node<K, V>>,

    /// Slab key of the next entry to yield; None once exhausted
    cursor: Option<usize>,

    /// Entries left to yield (exact)
    remaining: usize,
}

impl<'a, K, V> Keys<'a, K, V> {
    #[inline]
    pub(super) fn new(nodes: &'a Slab<Node<K, V>>, head: Option<usize>, len: usize) -> Self {
        Self {
            nodes,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let idx = self.cursor?;
        let node = &self.nodes[idx];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the `(&key, &value)` pairs of an `OrderedListTable` in
/// ascending key order.
///
/// Created by [`OrderedListTable::iter`](super::OrderedListTable::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    nodes: &'a Slab<Node<K, V>>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    #[inline]
    pub(super) fn new(nodes: &'a Slab<Node<K, V>>, head: Option<usize>, len: usize) -> Self {
        Self {
            nodes,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let idx = self.cursor?;
        let node = &self.nodes[idx];
        self.cursor = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

// ============================================================================
// Unit Tests
// ============================================================================
