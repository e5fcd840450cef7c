//! logh - a single-file log handle that cleans up after itself
//!
//! A [`LogHandle`] filters messages by a severity threshold fixed at open time,
//! creates its file only when the first message is accepted, counts accepted
//! messages, and deletes the file on close if it ended up empty.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod logfile;

pub use config::LogConfig;
pub use error::{LogError, Result};
pub use logfile::{Finalized, HandleState, LineFormat, LogHandle, LogOptions};
