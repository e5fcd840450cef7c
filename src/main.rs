use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};

use logh::diagnostics;
use logh::input::parse_line;
use logh::LogConfig;

fn main() -> Result<()> {
    diagnostics::init_stderr_logging()?;

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: logh <config.toml> < messages")?;

    let config = LogConfig::load(&config_path)?;
    let mut handle = config.open()?;

    tracing::info!(
        "Logging to {} (threshold {})",
        handle.path().display(),
        handle.threshold()
    );

    let stdin = std::io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read from stdin")?;
        match parse_line(&line) {
            Some((level, text)) => handle.add_message(level, text),
            None if line.trim().is_empty() => {}
            None => tracing::warn!("Skipping malformed line {}: {:?}", number + 1, line),
        }
    }

    let accepted = handle.msg_count();
    let outcome = handle.close()?;
    tracing::info!("Accepted {} messages ({:?})", accepted, outcome);

    Ok(())
}
