//! Storage configuration types

use crate::constants::DEFAULT_USER_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backing JSON file for user records
    ///
    /// Two running stores must never point at the same file.
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_USER_DATA_FILE),
        }
    }
}
