//! MemTable Module
//!
//! In-memory sorted write buffer for recent writes.
//!
//! ## Responsibilities
//! - Keep every written key exactly once, in ascending order
//! - Upsert in place: a later write to a key replaces its operation
//! - Keep deleted keys as tombstones so reads report them absent
//! - Ordered iteration for a future flush to sorted files
//!
//! ## Data Structure Choice
//! A sorted `Vec<Entry>` searched with a lower bound:
//! - O(log n) search, O(n) worst-case shift on insert
//! - Contiguous, cheap to iterate in order
//! - Future: switch to a BTreeMap or skiplist if write volume demands it

use std::fmt;

mod table;

pub use table::{Iter, MemTable};

/// A key paired with its most recent operation
pub type Entry = (String, Operation);

/// Operation recorded against a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// A live value
    Set(String),

    /// A tombstone (deleted key)
    Delete,
}

impl Operation {
    /// Convenience constructor for `Operation::Set`
    pub fn set(value: impl Into<String>) -> Self {
        Operation::Set(value.into())
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Operation::Delete)
    }

    /// The live value, or `None` for a tombstone
    pub fn value(&self) -> Option<&str> {
        match self {
            Operation::Set(value) => Some(value),
            Operation::Delete => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Set(value) => write!(f, "SET {}", value),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}
