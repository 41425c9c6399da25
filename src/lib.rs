//! # lsmkv
//!
//! The in-memory write buffer of a log-structured-merge key-value engine:
//! - Sorted MemTable with in-place upserts
//! - Tombstones that mask deleted keys
//! - A thin `Engine` facade exposing insert / delete / lookup
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Engine (facade)                           │
//! │           insert / delete / lookup / execute                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  MemTable   │          │ storage_path│
//!   │ (sorted Vec)│          │  (reserved) │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! Flushing to sorted files, compaction, and the write-ahead log are not
//! part of this crate; the storage path is carried for the layer that will
//! own them.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod memtable;
pub mod command;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LsmError, Result};
pub use config::Config;
pub use engine::Engine;
pub use memtable::{MemTable, Operation};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of lsmkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
