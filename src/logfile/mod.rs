//! Single-file log handle
//!
//! Provides the lazily-created, threshold-filtered log file, its line layouts,
//! and the delete-if-empty cleanup run on close.

mod finalize;
mod format;
mod handle;

pub use finalize::Finalized;
pub use format::LineFormat;
pub use handle::{HandleState, LogHandle, LogOptions};
