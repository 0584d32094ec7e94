//! Rotating log writer

use chrono::Local;
use logwheel_core::{constants, Error, LogConfig};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Hook invoked with every filesystem error the logger swallows
pub type ErrorHook = Box<dyn Fn(&Error) + Send + Sync>;

/// Size-rotating file logger
///
/// Appends timestamped lines to `"{base_name}-0.log"` inside the
/// configured directory. When the active file reaches the size threshold,
/// every file shifts one index older and whatever lands past the
/// retention window is deleted. `write` never fails visibly: a logger
/// must not take the host application down with it. Failures reach the
/// caller only through an optional [`ErrorHook`].
///
/// Single-writer by design. Concurrent writers against the same
/// directory and base name can interleave a rotation with an in-flight
/// append.
pub struct RotatingLogger {
    /// Live configuration, reread on every write
    pub config: LogConfig,
    error_hook: Option<ErrorHook>,
}

impl RotatingLogger {
    /// Create a logger for the given configuration
    ///
    /// Nothing touches the filesystem until the first [`write`]; the
    /// active file is created lazily and the configured directory is
    /// expected to exist already.
    ///
    /// [`write`]: RotatingLogger::write
    pub fn new(config: LogConfig) -> Self {
        Self {
            config,
            error_hook: None,
        }
    }

    /// Attach a hook that observes every swallowed error
    pub fn with_error_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.error_hook = Some(Box::new(hook));
        self
    }

    /// Append a timestamped entry to the active log file
    ///
    /// Best-effort: any filesystem failure skips the rest of the failing
    /// step and returns normally.
    pub fn write(&self, text: &str) {
        let path = self.active_path();

        if !path.exists() {
            if let Err(e) = File::create(&path) {
                self.report(Error::Create(path, e));
                return;
            }
        }

        let entry = format_entry(text);

        // Handle is scoped to this block; rotation below never races an
        // open descriptor of ours.
        {
            let mut file = match OpenOptions::new().append(true).open(&path) {
                Ok(file) => file,
                Err(e) => {
                    self.report(Error::Open(path, e));
                    return;
                }
            };
            if let Err(e) = file.write_all(entry.as_bytes()) {
                self.report(Error::Write(path.clone(), e));
            }
        }

        if self.config.echo_to_console {
            let mut stdout = std::io::stdout().lock();
            let _ = stdout.write_all(entry.as_bytes());
        }

        self.cleanup();
    }

    /// Path of the active log file
    pub fn active_path(&self) -> PathBuf {
        self.file_path(0)
    }

    /// Path of the log file at `index`
    pub fn file_path(&self, index: u32) -> PathBuf {
        self.config
            .directory
            .join(constants::log_file_name(&self.config.base_name, index))
    }

    /// Rotate and enforce retention if the active file crossed the threshold
    fn cleanup(&self) {
        let size = self.active_size();

        if size > 0 && size >= self.config.max_bytes() && self.config.rotation_enabled() {
            self.rotate();

            // Whatever the shift pushed past the retention window goes.
            let expired = self.file_path(self.config.max_file_count);
            if let Err(e) = fs::remove_file(&expired) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    self.report(Error::Delete(expired, e));
                }
            }
        }
    }

    /// Byte length of the active file; a missing file counts as empty
    fn active_size(&self) -> u64 {
        let path = self.active_path();
        match fs::metadata(&path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => {
                self.report(Error::Metadata(path, e));
                0
            }
        }
    }

    /// Shift every log file one index older, vacating index 0
    ///
    /// Walks the contiguous index chain downward so a deeper file is
    /// always out of the way before a shallower one lands in its slot.
    /// The walk is bounded by `max_file_count` iterations regardless of
    /// what is on disk.
    fn rotate(&self) {
        debug!(
            "Rotating {} logs in {}",
            self.config.base_name,
            self.config.directory.display()
        );

        let mut top = 0;
        while top < self.config.max_file_count && self.file_path(top + 1).exists() {
            top += 1;
        }

        for index in (0..=top).rev() {
            let from = self.file_path(index);
            let to = self.file_path(index + 1);
            if let Err(e) = fs::rename(&from, &to) {
                self.report(Error::Move(from, to, e));
            }
        }
    }

    fn report(&self, err: Error) {
        warn!("Log write failed: {}", err);
        if let Some(hook) = &self.error_hook {
            hook(&err);
        }
    }
}

/// Format a log entry as `"[<timestamp>]: <text>\n"`
///
/// The timestamp is the current local time in a medium date + medium
/// time rendering. Only the `[...]: ` wrapper is contractual.
pub fn format_entry(text: &str) -> String {
    let timestamp = Local::now().format("%b %d, %Y %H:%M:%S");
    format!("[{}]: {}\n", timestamp, text)
}
