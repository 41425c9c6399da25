//! Engine Module
//!
//! The key-value facade over a single MemTable.
//!
//! ## Responsibilities
//! - Translate insert / delete into MemTable upserts
//! - Serve lookups straight from the MemTable
//! - Hold the storage path for the future flush / compaction layer
//! - Route shell commands (`execute`)

use std::path::{Path, PathBuf};

use crate::command::{Command, Reply};
use crate::config::Config;
use crate::memtable::{MemTable, Operation};

/// The main storage engine
///
/// ## Concurrency Model
///
/// Single writer, synchronous. Mutations take `&mut self`; callers that
/// share an engine across threads wrap it in their own lock.
#[derive(Debug)]
pub struct Engine {
    /// Engine configuration (holds the reserved storage path)
    config: Config,

    /// In-memory table for recent writes
    memtable: MemTable,
}

impl Engine {
    /// Create an engine whose persistent files would live at `storage_path`
    ///
    /// The path is not opened or created.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self::with_config(Config::builder().storage_path(storage_path).build())
    }

    /// Create an engine from a full config
    pub fn with_config(config: Config) -> Self {
        tracing::info!(storage_path = %config.storage_path.display(), "engine created");
        Self {
            config,
            memtable: MemTable::new(),
        }
    }

    /// Set `key` to `value`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        tracing::debug!(key = %key, "insert");
        self.memtable.operate(key, Operation::Set(value.into()));
    }

    /// Delete `key` by writing a tombstone
    pub fn delete(&mut self, key: impl Into<String>) {
        let key = key.into();
        tracing::debug!(key = %key, "delete");
        self.memtable.operate(key, Operation::Delete);
    }

    /// Get the live value for `key`
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let value = self.memtable.lookup(key);
        tracing::debug!(key = %key, found = value.is_some(), "lookup");
        value
    }

    /// Execute a command
    ///
    /// Routes commands to the operations above
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Set { key, value } => {
                self.insert(key, value);
                Reply::Ok
            }
            Command::Delete { key } => {
                self.delete(key);
                Reply::Ok
            }
            Command::Get { key } => match self.lookup(&key) {
                Some(value) => Reply::Value(value.to_string()),
                None => Reply::NotFound,
            },
            Command::Size => Reply::Size(self.size()),
            Command::Dump => Reply::Entries(
                self.memtable
                    .iter()
                    .map(|(key, op)| (key.to_string(), op.clone()))
                    .collect(),
            ),
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of distinct keys recorded in the memtable
    pub fn size(&self) -> usize {
        self.memtable.size()
    }

    /// Read-only view of the memtable
    pub fn memtable(&self) -> &MemTable {
        &self.memtable
    }

    /// Get the reserved storage path
    pub fn storage_path(&self) -> &Path {
        &self.config.storage_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
