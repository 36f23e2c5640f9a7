//! Ordered symbol table implementation.
//!
//! ## Architecture
//!
//! `OrderedListTable` keeps its entries in a singly linked chain in strictly
//! increasing key order, with no duplicate keys. The chain lives in a slab:
//!
//! - **Slab**: pre-allocatable node storage; links are `usize` slab keys
//! - **head / tail**: cached slab keys of the least and greatest entry
//! - **len**: entry count, always equal to the chain length
//!
//! Every mutating operation preserves the ordering invariant and either
//! completes fully or leaves the table untouched.
//!
//! ## Lookup Keys
//!
//! Lookup-style operations take `&Q` where `K: Borrow<Q>`, mirroring
//! `BTreeMap`, so a table keyed by `String` can be queried with `&str`.
//!
//! ## Example
//!
//! ```
//! use ordlist::OrderedListTable;
//!
//! let mut table = OrderedListTable::new();
//! table.put("E", 1);
//! table.put("A", 2);
//! table.put("C", 3);
//!
//! assert_eq!(table.get("C"), Some(&3));
//! assert_eq!(table.rank("E"), 2);
//! assert_eq!(table.ceiling("B"), Some(&"C"));
//!
//! let (key, value) = table.delete_min().unwrap();
//! assert_eq!((key, value), ("A", 2));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use slab::Slab;

use crate::error::{Result, TableError};
use crate::table::{Iter, Keys, Node};

/// Ordered symbol table
///
/// A mutable key→value store whose entries are kept in ascending key order in
/// a slab-allocated singly linked chain. Keys are unique; inserting an
/// existing key overwrites its value in place.
#[derive(Debug, Clone)]
pub struct OrderedListTable<K, V> {
    /// Node storage
    /// Key: slab index, Value: entry plus successor link
    nodes: Slab<Node<K, V>>,

    /// Slab key of the least entry (chain head)
    head: Option<usize>,

    /// Slab key of the greatest entry (chain tail)
    /// The tail node always has `next == None`
    tail: Option<usize>,

    /// Number of entries in the chain
    len: usize,
}

impl<K, V> Default for OrderedListTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedListTable<K, V> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a table with pre-allocated capacity
    ///
    /// # Example
    ///
    /// ```
    /// use ordlist::OrderedListTable;
    ///
    /// let table: OrderedListTable<u64, u64> = OrderedListTable::with_capacity(1_000);
    /// assert!(table.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get the number of entries in the table
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the table holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Ordered Queries (key-free)
    // ========================================================================

    /// Get the least key, or `None` if the table is empty
    #[inline]
    pub fn min(&self) -> Option<&K> {
        self.head.map(|idx| &self.nodes[idx].key)
    }

    /// Get the greatest key, or `None` if the table is empty
    #[inline]
    pub fn max(&self) -> Option<&K> {
        self.tail.map(|idx| &self.nodes[idx].key)
    }

    /// Get the key at sorted position `rank` (0-indexed).
    ///
    /// Inverse of [`rank`](Self::rank): for every valid position `k`,
    /// `table.rank(table.select(k).unwrap()) == k`. Out-of-range positions
    /// yield `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use ordlist::OrderedListTable;
    ///
    /// let table: OrderedListTable<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
    /// assert_eq!(table.select(1), Some(&"b"));
    /// assert_eq!(table.select(2), None);
    /// ```
    pub fn select(&self, rank: usize) -> Option<&K> {
        if rank >= self.len {
            return None;
        }
        let mut cur = self.head?;
        for _ in 0..rank {
            cur = self.nodes[cur].next?;
        }
        Some(&self.nodes[cur].key)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate over the keys in ascending order.
    ///
    /// Each call creates a fresh cursor starting at the least key, so separate
    /// traversals are independent. The cursor borrows the table; the borrow
    /// checker prevents mutation while it is live.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(&self.nodes, self.head, self.len)
    }

    /// Iterate over `(&key, &value)` pairs in ascending key order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    // ========================================================================
    // Chain surgery (private)
    // ========================================================================

    /// Unlink the node at `idx`, whose predecessor in the chain is `prev`
    /// (`None` when `idx` is the head). Returns the removed node.
    fn unlink(&mut self, prev: Option<usize>, idx: usize) -> Node<K, V> {
        let node = self.nodes.remove(idx);
        match prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }
        self.len -= 1;
        node
    }
}

impl<K: Ord, V> OrderedListTable<K, V> {
    // ========================================================================
    // Search
    // ========================================================================

    /// Check whether `key` is present in the table. O(n).
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Get the value associated with `key`, or `None` if absent. O(n).
    ///
    /// The scan stops at the first key greater than `key`; the ordering
    /// invariant guarantees no match can follow it.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.head;
        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            match node.key.borrow().cmp(key) {
                Ordering::Less => cur = node.next,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => return None,
            }
        }
        None
    }

    /// Get a mutable reference to the value associated with `key`. O(n).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.head;
        while let Some(idx) = cur {
            match self.nodes[idx].key.borrow().cmp(key) {
                Ordering::Less => cur = self.nodes[idx].next,
                Ordering::Equal => return Some(&mut self.nodes[idx].value),
                Ordering::Greater => return None,
            }
        }
        None
    }

    /// Count the keys strictly less than `key`. O(n).
    ///
    /// The count doubles as the sorted insertion position for `key`.
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut smaller = 0;
        let mut cur = self.head;
        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            if node.key.borrow() < key {
                smaller += 1;
                cur = node.next;
            } else {
                break;
            }
        }
        smaller
    }

    /// Get the greatest key less than or equal to `key`, or `None` if `key`
    /// is smaller than every key in the table. O(n).
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut below = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            match node.key.borrow().cmp(key) {
                Ordering::Less => {
                    below = Some(idx);
                    cur = node.next;
                }
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => break,
            }
        }
        below.map(|idx| &self.nodes[idx].key)
    }

    /// Get the least key greater than or equal to `key`, or `None` if `key`
    /// is larger than every key in the table. O(n).
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.head;
        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            if node.key.borrow() >= key {
                return Some(&node.key);
            }
            cur = node.next;
        }
        None
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert `key` with `value`, or overwrite the value of an existing equal
    /// key in place. O(n).
    ///
    /// Returns the previous value on overwrite (size and ordering unchanged),
    /// `None` on a fresh insert. The new node is spliced in immediately before
    /// the first greater key, so the ordering invariant is preserved; equal
    /// keys are always overwrites, never duplicates.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        // Walk to the insertion point: `prev` trails the last node < key,
        // `cur` lands on the first node > key (or None at the end).
        let mut prev = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            match self.nodes[idx].key.cmp(&key) {
                Ordering::Less => {
                    prev = Some(idx);
                    cur = self.nodes[idx].next;
                }
                Ordering::Equal => {
                    return Some(mem::replace(&mut self.nodes[idx].value, value));
                }
                Ordering::Greater => break,
            }
        }

        let entry = self.nodes.insert(Node::new(key, value));
        self.nodes[entry].next = cur;
        match prev {
            Some(p) => self.nodes[p].next = Some(entry),
            None => self.head = Some(entry),
        }
        if cur.is_none() {
            self.tail = Some(entry);
        }
        self.len += 1;
        None
    }

    /// Remove `key` and return its value.
    ///
    /// Removing an absent key is a defined no-op returning `None`, not an
    /// error. O(n).
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            match self.nodes[idx].key.borrow().cmp(key) {
                Ordering::Less => {
                    prev = Some(idx);
                    cur = self.nodes[idx].next;
                }
                Ordering::Equal => return Some(self.unlink(prev, idx).value),
                Ordering::Greater => return None,
            }
        }
        None
    }

    /// Remove and return the entry with the least key.
    ///
    /// # Errors
    ///
    /// [`TableError::Underflow`] if the table is empty; the table is left
    /// unchanged.
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        let head = self.head.ok_or(TableError::Underflow { op: "delete_min" })?;
        Ok(self.unlink(None, head).into_entry())
    }

    /// Remove and return the entry with the greatest key.
    ///
    /// Walks the chain to find the tail's predecessor, so O(n) unlike
    /// [`delete_min`](Self::delete_min).
    ///
    /// # Errors
    ///
    /// [`TableError::Underflow`] if the table is empty; the table is left
    /// unchanged.
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        let tail = self.tail.ok_or(TableError::Underflow { op: "delete_max" })?;
        let mut prev = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            if idx == tail {
                break;
            }
            prev = Some(idx);
            cur = self.nodes[idx].next;
        }
        Ok(self.unlink(prev, tail).into_entry())
    }
}

// ============================================================================
// Container traits
// ============================================================================

impl<K: Ord, V> FromIterator<(K, V)> for OrderedListTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedListTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedListTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
