//! Threshold-filtered log file handle
//!
//! The backing file is only created once a message passes the threshold, and
//! is deleted again on close if it ended up empty. A handle that never logs
//! anything therefore leaves nothing behind on disk.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LogError, Result};

use super::finalize::{self, Finalized};
use super::format::LineFormat;

/// Options fixed at open time besides path and threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Layout of each written line
    pub format: LineFormat,
}

/// Lifecycle state of an open handle
///
/// A closed handle has been consumed, so there is no `Closed` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// Opened, nothing accepted yet, no file on disk from this handle
    Created,
    /// At least one message accepted, stream is open
    Active,
}

/// Handle on a single append-style log file
#[derive(Debug)]
pub struct LogHandle {
    /// Target file, fixed at open
    path: PathBuf,
    /// Highest level accepted; 0 disables logging
    threshold: u32,
    format: LineFormat,
    /// Created on the first accepted message
    stream: Option<File>,
    /// Messages accepted by this handle (not by earlier sessions on the same path)
    msg_count: usize,
    finalized: bool,
}

impl LogHandle {
    /// Open a handle writing plain lines to `path`
    ///
    /// Fails with [`LogError::InvalidArgument`] on an empty path, and with
    /// [`LogError::Io`] if a file could not be created or appended at `path`.
    /// The file itself is not created here.
    pub fn open(path: impl AsRef<Path>, threshold: u32) -> Result<Self> {
        Self::open_with(path, threshold, LogOptions::default())
    }

    /// Open a handle with explicit options
    pub fn open_with(path: impl AsRef<Path>, threshold: u32, options: LogOptions) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LogError::InvalidArgument(
                "log path must not be empty".to_string(),
            ));
        }

        finalize::probe_target(path)?;

        tracing::debug!(
            path = %path.display(),
            threshold,
            format = options.format.as_str(),
            "Opened log handle"
        );

        Ok(Self {
            path: path.to_path_buf(),
            threshold,
            format: options.format,
            stream: None,
            msg_count: 0,
            finalized: false,
        })
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the threshold this handle was opened with
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Get the line format this handle writes
    pub fn format(&self) -> LineFormat {
        self.format
    }

    /// Number of messages accepted since this handle was opened
    pub fn msg_count(&self) -> usize {
        self.msg_count
    }

    /// Check whether the backing file has been opened by this handle
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    pub fn state(&self) -> HandleState {
        if self.stream.is_some() {
            HandleState::Active
        } else {
            HandleState::Created
        }
    }

    /// Check whether a message at `level` would be accepted
    pub fn would_log(&self, level: u32) -> bool {
        self.threshold > 0 && level <= self.threshold
    }

    /// Append a message if its level passes the threshold
    ///
    /// Write failures are reported through `tracing` and otherwise ignored; use
    /// [`try_add_message`](Self::try_add_message) to observe them.
    pub fn add_message(&mut self, level: u32, text: &str) {
        if let Err(e) = self.try_add_message(level, text) {
            tracing::warn!(error = %e, level, "Failed to write log message");
        }
    }

    /// Append a message if its level passes the threshold
    ///
    /// Returns `Ok(false)` when the message was filtered out. An accepted
    /// message is counted even if writing it fails.
    pub fn try_add_message(&mut self, level: u32, text: &str) -> Result<bool> {
        if !self.would_log(level) {
            tracing::trace!(level, threshold = self.threshold, "Message filtered out");
            return Ok(false);
        }

        self.msg_count += 1;

        if self.stream.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| LogError::io(&self.path, e))?;
            tracing::debug!(path = %self.path.display(), "Created log file");
            self.stream = Some(file);
        }

        if let Some(stream) = self.stream.as_mut() {
            self.format
                .write_line(stream, level, text)
                .map_err(|e| LogError::io(&self.path, e))?;
        }

        Ok(true)
    }

    /// Append a formatted message; the arguments are only rendered when accepted
    pub fn add_fmt(&mut self, level: u32, args: fmt::Arguments<'_>) {
        if self.would_log(level) {
            self.add_message(level, &args.to_string());
        }
    }

    /// Flush the stream and sync it to disk; no-op before the first accepted message
    pub fn sync(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.as_mut() {
            stream.flush().map_err(|e| LogError::io(&self.path, e))?;
            stream.sync_all().map_err(|e| LogError::io(&self.path, e))?;
        }
        Ok(())
    }

    /// Close the handle, deleting the file if it is empty
    ///
    /// A file that was removed by someone else in the meantime is not an error.
    pub fn close(mut self) -> Result<Finalized> {
        self.finalize()
    }

    fn finalize(&mut self) -> Result<Finalized> {
        self.finalized = true;

        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.flush() {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to flush log file");
            }
        }

        let outcome = finalize::remove_if_empty(&self.path)?;
        match outcome {
            Finalized::Removed => {
                tracing::debug!(path = %self.path.display(), "Removed empty log file");
            }
            Finalized::Missing if self.msg_count > 0 => {
                tracing::debug!(path = %self.path.display(), "Log file was removed before close");
            }
            _ => {}
        }

        Ok(outcome)
    }
}

impl Drop for LogHandle {
    fn drop(&mut self) {
        if !self.finalized {
            if let Err(e) = self.finalize() {
                tracing::warn!(error = %e, "Failed to finalize log file on drop");
            }
        }
    }
}
