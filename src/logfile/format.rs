//! On-disk line layout
//!
//! Every accepted message becomes exactly one newline-terminated line. The
//! layout of that line is chosen once, when the handle is opened.

use std::io::{self, Write};

use chrono::Local;
use serde::{Deserialize, Serialize};

/// How an accepted message is laid out in the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    /// Just the message text
    #[default]
    Plain,
    /// Message text prefixed with its severity level, e.g. `[2] disk almost full`
    Leveled,
    /// Message text prefixed with local day/month and time of day
    Timestamped,
}

impl LineFormat {
    /// Get the config name for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            LineFormat::Plain => "plain",
            LineFormat::Leveled => "leveled",
            LineFormat::Timestamped => "timestamped",
        }
    }

    /// Write one message as a single line
    ///
    /// Embedded line breaks are kept as-is; the caller owns the text.
    pub fn write_line<W: Write>(&self, out: &mut W, level: u32, text: &str) -> io::Result<()> {
        match self {
            LineFormat::Plain => writeln!(out, "{}", text),
            LineFormat::Leveled => writeln!(out, "[{}] {}", level, text),
            LineFormat::Timestamped => {
                let now = Local::now().format("%d/%m - %H:%M:%S");
                writeln!(out, "{}  {}", now, text)
            }
        }
    }
}
