//! Configuration for opening a log handle from a TOML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logfile::{LineFormat, LogHandle, LogOptions};

/// Log handle configuration
///
/// ```toml
/// path = "~/work/run.log"
/// threshold = 2
/// format = "leveled"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file path; a leading `~` is expanded to the home directory
    pub path: String,

    /// Highest message level written (default: 0 = logging disabled)
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Line layout: "plain" (default), "leveled" or "timestamped"
    #[serde(default)]
    pub format: LineFormat,
}

fn default_threshold() -> u32 {
    0
}

impl LogConfig {
    /// Create a config for `path` with default threshold and format
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            threshold: default_threshold(),
            format: LineFormat::default(),
        }
    }

    /// Load configuration from a TOML file
    pub fn load(file: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read config file {}", file.display()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save configuration to a TOML file
    pub fn save(&self, file: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(file, content)
            .with_context(|| format!("Failed to write config file {}", file.display()))?;
        Ok(())
    }

    /// Log file path with `~` expanded
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).into_owned())
    }

    /// Open a log handle as described by this config
    pub fn open(&self) -> Result<LogHandle> {
        let path = self.resolved_path();
        let options = LogOptions {
            format: self.format,
        };
        LogHandle::open_with(&path, self.threshold, options)
            .with_context(|| format!("Failed to open log file {}", path.display()))
    }
}
