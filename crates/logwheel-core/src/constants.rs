//! Constants and default paths for logwheel

use std::path::PathBuf;

/// Default logwheel home directory name
pub const LOGWHEEL_DIR: &str = ".logwheel";

/// Default log directory name
pub const LOGS_DIR: &str = "logs";

/// Default filename stem for log files
pub const DEFAULT_BASE_NAME: &str = "logfile";

/// Default rotation threshold in KiB (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE_KB: u64 = 1024;

/// Default number of rotated files retained beyond the active one
pub const DEFAULT_MAX_FILE_COUNT: u32 = 4;

/// Get the logwheel home directory
pub fn logwheel_home() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(LOGWHEEL_DIR))
        .unwrap_or_else(|| PathBuf::from(LOGWHEEL_DIR))
}

/// Get the default log directory
///
/// Platform differences live entirely inside the `dirs` crate; nothing
/// here branches on the target OS.
pub fn default_log_dir() -> PathBuf {
    logwheel_home().join(LOGS_DIR)
}

/// Get the file name for a log file index
///
/// Index 0 is the active file; higher indices are progressively older
/// rotations. The `"{base}-{index}.log"` shape is a compatibility
/// contract and must not change.
pub fn log_file_name(base_name: &str, index: u32) -> String {
    format!("{}-{}.log", base_name, index)
}

/// Ensure the default log directory exists
///
/// Idempotent: an already-existing directory is left untouched.
pub fn ensure_default_log_dir() -> std::io::Result<PathBuf> {
    let dir = default_log_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
