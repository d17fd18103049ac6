//! Content source for the folio terminal.
//!
//! Portfolio pages are plain-text documents addressed by a command name and
//! optionally a sub-command name. They are loaded once, before the first
//! command is dispatched, and never change afterwards.

mod loader;
mod tree;

pub use loader::CONTENT_FILE;
pub use tree::{CommandPages, ContentTree};

/// Normalize a lookup key: lowercase, then drop everything that is not an
/// ASCII letter or digit.
///
/// Used for sub-command keys both when they are registered and when they are
/// looked up, so `"Acme Corp!"` and `"acmecorp"` address the same page.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Split document text into display lines.
///
/// Splits on `\n` only and drops one trailing `\r` per line. A trailing
/// newline produces a final empty line, which renders as a blank separator
/// after the page.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
