//! The terminal front: a registry plus one session.

use folio_content::ContentTree;
use folio_types::config::TerminalConfig;

use crate::highlight::highlight;
use crate::history::{EntryKind, HistoryEntry};
use crate::processor::process_command;
use crate::recall::EditBuffer;
use crate::registry::CommandRegistry;
use crate::session::Session;

/// A running terminal.
#[derive(Debug)]
pub struct Terminal {
    registry: CommandRegistry,
    session: Session,
    prompt: String,
}

impl Terminal {
    /// Build a terminal over `content` and print the welcome banner.
    pub fn new(config: &TerminalConfig, content: &ContentTree) -> Self {
        Self::with_session(config, content, Session::new(config.recall_capacity))
    }

    /// Like [`Terminal::new`] with a caller-provided session.
    pub fn with_session(config: &TerminalConfig, content: &ContentTree, mut session: Session) -> Self {
        let registry = CommandRegistry::from_content(content, &config.welcome);
        session
            .history
            .push_lines(EntryKind::Output, config.welcome.iter().cloned());
        Self {
            registry,
            session,
            prompt: config.prompt.clone(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.session.history.entries()
    }

    /// The line being edited.
    pub fn edit(&mut self) -> &mut EditBuffer {
        &mut self.session.edit
    }

    /// Highlight markup for the edit buffer, with the cursor marker.
    pub fn preview(&self) -> String {
        let edit = &self.session.edit;
        highlight(
            edit.text(),
            edit.cursor(),
            &self.registry,
            self.session.game.is_active(),
        )
    }

    /// Submit the edit buffer and empty it.
    pub fn submit(&mut self) {
        let line = self.session.edit.take();
        self.submit_line(&line);
    }

    /// Submit `raw` as if typed. Blank lines are ignored entirely.
    ///
    /// Otherwise the highlighted line is echoed into history, recorded for
    /// recall, then processed.
    pub fn submit_line(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        let echo = highlight(
            raw,
            raw.chars().count(),
            &self.registry,
            self.session.game.is_active(),
        );
        self.session.history.push_input(&echo);
        self.session.recall.record(raw);
        process_command(raw, &self.registry, &mut self.session);
    }

    /// Load the previous recalled command into the edit buffer.
    pub fn recall_previous(&mut self) {
        let Session { recall, edit, .. } = &mut self.session;
        recall.previous(edit);
    }

    /// Load the next recalled command, or empty the buffer past the newest.
    pub fn recall_next(&mut self) {
        let Session { recall, edit, .. } = &mut self.session;
        recall.next(edit);
    }
}
