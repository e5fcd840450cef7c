//! Filesystem checks around the log file's lifetime
//!
//! Probing the target location before a handle is handed out, and the
//! delete-if-empty cleanup that runs when it is closed.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::{LogError, Result};

/// What the close-time cleanup found at the log path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finalized {
    /// The file existed with zero length and was deleted
    Removed,
    /// The file has content (or is not a regular file) and was left alone
    Kept,
    /// Nothing was there, e.g. someone else deleted it
    Missing,
}

/// Check that a log file could be created or appended to at `path`
///
/// An existing file is opened for append and released again. A missing file is
/// created exclusively and removed straight away, so a successful probe leaves
/// no trace.
pub fn probe_target(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) => {
            if meta.is_dir() {
                return Err(LogError::io(
                    path,
                    io::Error::new(io::ErrorKind::Other, "path is a directory"),
                ));
            }
            OpenOptions::new()
                .append(true)
                .open(path)
                .map(drop)
                .map_err(|e| LogError::io(path, e))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let probe = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| LogError::io(path, e))?;
            drop(probe);
            fs::remove_file(path).map_err(|e| LogError::io(path, e))
        }
        Err(e) => Err(LogError::io(path, e)),
    }
}

/// Delete the file at `path` if it exists and is empty
///
/// A file that is already gone counts as finalized.
pub fn remove_if_empty(path: &Path) -> Result<Finalized> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Finalized::Missing),
        Err(e) => return Err(LogError::io(path, e)),
    };

    if !meta.is_file() || meta.len() > 0 {
        return Ok(Finalized::Kept);
    }

    match fs::remove_file(path) {
        Ok(()) => Ok(Finalized::Removed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Finalized::Missing),
        Err(e) => Err(LogError::io(path, e)),
    }
}
