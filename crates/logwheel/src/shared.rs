//! Process-wide shared logger
//!
//! An explicitly initialized slot rather than a lazily materialized
//! singleton: nothing exists until [`init`] (or [`install`]) runs, and
//! writing through an empty slot is a silent no-op.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::writer::RotatingLogger;
use logwheel_core::LogConfig;

static SHARED: Lazy<Mutex<Option<RotatingLogger>>> = Lazy::new(|| Mutex::new(None));

/// Install a logger built from `config` as the shared instance
///
/// Replaces any previously installed logger.
pub fn init(config: LogConfig) {
    install(RotatingLogger::new(config));
}

/// Install an already-constructed logger (e.g. one carrying an error hook)
pub fn install(logger: RotatingLogger) {
    *SHARED.lock() = Some(logger);
}

/// Write a line through the shared logger
///
/// No-op when no logger has been installed.
pub fn logw(text: &str) {
    if let Some(logger) = SHARED.lock().as_ref() {
        logger.write(text);
    }
}

/// Write one or more `Display` values through the shared logger,
/// joined with single spaces
///
/// ```no_run
/// use logwheel::{logw, LogConfig};
///
/// logwheel::shared::init(LogConfig::default());
/// logw!("job", 42, "finished");
/// ```
#[macro_export]
macro_rules! logw {
    ($($arg:expr),+ $(,)?) => {{
        let parts = [$(::std::string::ToString::to_string(&$arg)),+];
        $crate::shared::logw(&parts.join(" "));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // One test exercises the whole lifecycle; the slot is process-global
    // and tests run concurrently.
    #[test]
    fn test_shared_lifecycle() {
        // Writing before init must not panic or create anything.
        logw("dropped on the floor");

        let dir = TempDir::new().unwrap();
        init(LogConfig::new(dir.path(), "shared"));

        logw!("job", 42, "finished");
        logw("plain line");

        let path = dir.path().join("shared-0.log");
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("]: job 42 finished"));
        assert!(lines[1].ends_with("]: plain line"));
        assert!(!content.contains("dropped on the floor"));
    }
}
