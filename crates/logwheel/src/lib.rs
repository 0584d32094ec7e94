//! Logwheel - Size-rotating file logger
//!
//! Appends timestamped lines to `"{base_name}-0.log"`, shifts every log
//! file one index older once the active file crosses the configured size
//! threshold, and deletes whatever falls past the retention window.
//! Writes are synchronous, single-writer, and best-effort: filesystem
//! failures are swallowed, observable only through an optional error
//! hook.
//!
//! ```no_run
//! use logwheel::{LogConfig, RotatingLogger};
//!
//! let logger = RotatingLogger::new(LogConfig::new("/var/log/myapp", "myapp"));
//! logger.write("service started");
//! ```

pub mod shared;
mod writer;

pub use logwheel_core::{Error, LogConfig, Result};
pub use writer::{format_entry, ErrorHook, RotatingLogger};

use std::path::PathBuf;

/// Get the default log directory
pub fn default_log_dir() -> PathBuf {
    logwheel_core::constants::default_log_dir()
}

/// Ensure the default log directory exists and return it
///
/// Idempotent: an existing directory and its contents are left untouched.
pub fn ensure_default_log_dir() -> Result<PathBuf> {
    Ok(logwheel_core::constants::ensure_default_log_dir()?)
}
