//! Scrollback history.
//!
//! Append-only for the life of a session. `clear` is the only way entries
//! are removed; ids keep counting across clears.

use crate::highlight::strip_cursor;

/// What produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Echo of a submitted line (highlight markup).
    Input,
    /// Regular command output.
    Output,
    /// A user-facing error.
    Error,
}

/// One line of scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Monotonically increasing id, unique within the session.
    pub id: u64,
    pub kind: EntryKind,
    /// Display text; may contain markup.
    pub text: String,
}

/// A batch of lines with one kind, produced by a command or game step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: EntryKind,
    pub lines: Vec<String>,
}

impl Reply {
    /// Regular output lines.
    pub fn output<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: EntryKind::Output,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// A single error line.
    pub fn error(line: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Error,
            lines: vec![line.into()],
        }
    }
}

/// The scrollback sink.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl HistoryLog {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: EntryKind, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(HistoryEntry { id, kind, text });
    }

    /// Append `lines` as entries of `kind`, in order.
    pub fn push_lines<I, S>(&mut self, kind: EntryKind, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(kind, line.into());
        }
    }

    /// Append a reply.
    pub fn push_reply(&mut self, reply: Reply) {
        self.push_lines(reply.kind, reply.lines);
    }

    /// Append the echo of a submitted line. Cursor markers are removed so
    /// the echo does not show a cursor.
    pub fn push_input(&mut self, markup: &str) {
        self.push(EntryKind::Input, strip_cursor(markup));
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in the order they were appended.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries appended after the first `from` (for incremental rendering).
    pub fn since(&self, from: usize) -> &[HistoryEntry] {
        self.entries.get(from..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
