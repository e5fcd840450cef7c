//! Parsing of `LEVEL TEXT` input lines fed to the `logh` binary

/// Split a line into its level and message text
///
/// The level is the first whitespace-separated token; the rest of the line,
/// minus the separating whitespace, is the message. Returns `None` for blank
/// lines and lines whose first token is not a non-negative integer.
pub fn parse_line(line: &str) -> Option<(u32, &str)> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }

    let (level, text) = match trimmed.find(char::is_whitespace) {
        Some(pos) => (&trimmed[..pos], trimmed[pos..].trim_start()),
        None => (trimmed, ""),
    };

    level.parse().ok().map(|level| (level, text))
}
