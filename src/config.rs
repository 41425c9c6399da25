//! Configuration for lsmkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{LsmError, Result};

/// Main configuration for an lsmkv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Location handed to the engine for persistent sorted files.
    /// Stored only; nothing in this crate reads or writes it.
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("./lsmkv_data"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage path reserved for the persistence layer
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }

    /// Build, rejecting an empty storage path
    pub fn try_build(self) -> Result<Config> {
        if self.config.storage_path.as_os_str().is_empty() {
            return Err(LsmError::Config("storage path must not be empty".to_string()));
        }
        Ok(self.config)
    }
}
