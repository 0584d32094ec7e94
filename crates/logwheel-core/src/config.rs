//! Logger configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};

// Default value functions for serde
fn default_directory() -> PathBuf {
    default_log_dir()
}

fn default_base_name() -> String {
    DEFAULT_BASE_NAME.to_string()
}

fn default_max_file_size_kb() -> u64 {
    DEFAULT_MAX_FILE_SIZE_KB
}

fn default_max_file_count() -> u32 {
    DEFAULT_MAX_FILE_COUNT
}

/// Logger configuration
///
/// All fields are public and freely mutable between writes; the logger
/// rereads them on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory in which the log files live
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Filename stem used to derive log file names
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// Rotation threshold in KiB; 0 disables rotation
    #[serde(default = "default_max_file_size_kb")]
    pub max_file_size_kb: u64,
    /// Rotated files retained beyond the active one; 0 disables rotation
    #[serde(default = "default_max_file_count")]
    pub max_file_count: u32,
    /// Mirror each entry to standard output
    #[serde(default)]
    pub echo_to_console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            base_name: default_base_name(),
            max_file_size_kb: DEFAULT_MAX_FILE_SIZE_KB,
            max_file_count: DEFAULT_MAX_FILE_COUNT,
            echo_to_console: false,
        }
    }
}

impl LogConfig {
    /// Create a config for a directory and base name, defaults elsewhere
    pub fn new<P: Into<PathBuf>, S: Into<String>>(directory: P, base_name: S) -> Self {
        Self {
            directory: directory.into(),
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Whether the rotation policy is active at all
    pub fn rotation_enabled(&self) -> bool {
        self.max_file_size_kb > 0 && self.max_file_count > 0
    }

    /// Rotation threshold in bytes
    pub fn max_bytes(&self) -> u64 {
        self.max_file_size_kb * 1024
    }
}
