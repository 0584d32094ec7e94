//! Error types for logwheel

use std::path::PathBuf;

/// Logwheel error type
///
/// One variant per filesystem operation the logger performs, carrying the
/// affected path(s) and the underlying IO error. The default write path
/// swallows these; they surface only through an injected error hook.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to create {0}: {1}")]
    Create(PathBuf, #[source] std::io::Error),

    #[error("Failed to open {0}: {1}")]
    Open(PathBuf, #[source] std::io::Error),

    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to move {0} to {1}: {2}")]
    Move(PathBuf, PathBuf, #[source] std::io::Error),

    #[error("Failed to delete {0}: {1}")]
    Delete(PathBuf, #[source] std::io::Error),

    #[error("Failed to read metadata of {0}: {1}")]
    Metadata(PathBuf, #[source] std::io::Error),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for logwheel
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Path the failed operation was acting on
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Error::Create(path, _)
            | Error::Open(path, _)
            | Error::Write(path, _)
            | Error::Move(path, _, _)
            | Error::Delete(path, _)
            | Error::Metadata(path, _)
            | Error::ConfigNotFound(path) => Some(path),
            Error::TomlError(_) | Error::IoError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::Open(PathBuf::from("/tmp/app-0.log"), io_err);
        assert_eq!(err.to_string(), "Failed to open /tmp/app-0.log: no such file");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_error_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = Error::Delete(PathBuf::from("/tmp/app-4.log"), io_err);
        assert_eq!(err.path(), Some(&PathBuf::from("/tmp/app-4.log")));
    }
}
