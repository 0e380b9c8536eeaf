//! Unified error types for Savepoint
//!
//! Provides a consistent error handling approach across all modules.

use std::path::PathBuf;

/// Unified error type for Savepoint operations
#[derive(Debug, thiserror::Error)]
pub enum SavepointError {
    /// I/O errors (directory scans, copy operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Save library errors (scanning users/titles, icon decoding)
    #[error("Library error: {0}")]
    Library(String),

    /// Copy engine errors (backup/restore/delete)
    #[error("Engine error: {0}")]
    Engine(String),

    /// Path validation errors
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using SavepointError
pub type Result<T> = std::result::Result<T, SavepointError>;

impl SavepointError {
    /// Create a Library error
    pub fn library(msg: impl Into<String>) -> Self {
        Self::Library(msg.into())
    }

    /// Create an Engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SavepointError::engine("copy interrupted");
        assert_eq!(format!("{}", err), "Engine error: copy interrupted");

        let err = SavepointError::path("/saves/none", "not a directory");
        assert_eq!(
            format!("{}", err),
            "Path error: /saves/none - not a directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SavepointError = io_err.into();
        assert!(matches!(err, SavepointError::Io(_)));
    }
}
