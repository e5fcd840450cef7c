//! Error types for the log handle

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`LogHandle`](crate::LogHandle) operations
#[derive(Debug, Error)]
pub enum LogError {
    /// The caller passed an argument the handle cannot work with (e.g. an empty path)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A filesystem operation on the log file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    /// Wrap an `io::Error` together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check whether this error is the "file is not there" kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
