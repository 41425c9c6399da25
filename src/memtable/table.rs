//! MemTable implementation
//!
//! Sorted-vector memtable. Single writer; callers sharing it across threads
//! must wrap it in their own lock.

use std::slice;

use super::{Entry, Operation};

/// In-memory table for recent writes
///
/// Invariants:
/// - `entries` is strictly ascending by key (no duplicates)
/// - `size == entries.len()`; entries are never removed
#[derive(Debug, Default)]
pub struct MemTable {
    entries: Vec<Entry>,

    /// Distinct keys ever recorded (tombstoned keys included)
    size: usize,
}

impl MemTable {
    /// Create a new empty MemTable
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `op` against `key`.
    ///
    /// An existing entry has its operation replaced in place; otherwise a
    /// new entry is inserted at the lower-bound position and `size` grows
    /// by one.
    pub fn operate(&mut self, key: impl Into<String>, op: Operation) {
        let key = key.into();
        let idx = self.lower_bound(&key);

        if let Some((existing, slot)) = self.entries.get_mut(idx) {
            if *existing == key {
                tracing::trace!(key = %key, tombstone = op.is_tombstone(), "memtable update");
                *slot = op;
                return;
            }
        }

        tracing::trace!(key = %key, tombstone = op.is_tombstone(), index = idx, "memtable insert");
        self.entries.insert(idx, (key, op));
        self.size += 1;
    }

    /// Get the live value for `key`.
    ///
    /// Returns `None` when the key was never written or is tombstoned.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Operation::value)
    }

    /// Get the raw operation recorded for `key`, tombstones included
    pub fn get(&self, key: &str) -> Option<&Operation> {
        let idx = self.lower_bound(key);
        // idx may equal len, or land on a greater key
        match self.entries.get(idx) {
            Some((existing, op)) if existing == key => Some(op),
            _ => None,
        }
    }

    /// True if `key` has an entry, live or tombstoned
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of distinct keys ever recorded
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterate over all entries in ascending key order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Smallest index whose key is `>= key`, or `entries.len()`
    fn lower_bound(&self, key: &str) -> usize {
        lower_bound(&self.entries, key)
    }
}

fn lower_bound(entries: &[Entry], key: &str) -> usize {
    entries.partition_point(|(existing, _)| existing.as_str() < key)
}

impl<'a> IntoIterator for &'a MemTable {
    type Item = (&'a str, &'a Operation);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over MemTable entries, ascending by key
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Operation);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, op)| (key.as_str(), op))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, op)| (key.as_str(), op))
    }
}

impl ExactSizeIterator for Iter<'_> {}
