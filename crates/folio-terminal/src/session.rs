//! Per-user session state.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::game::GameState;
use crate::history::{EntryKind, HistoryLog};
use crate::recall::{CommandRecall, EditBuffer};
use crate::registry::CommandOutput;

/// Everything that changes while someone uses the terminal.
///
/// The registry is shared and immutable; a session owns the rest.
#[derive(Debug)]
pub struct Session {
    pub history: HistoryLog,
    pub recall: CommandRecall,
    pub edit: EditBuffer,
    pub game: GameState,
    rng: SmallRng,
}

impl Session {
    /// A fresh session seeded from the OS.
    pub fn new(recall_capacity: usize) -> Self {
        Self::with_rng(SmallRng::from_os_rng(), recall_capacity)
    }

    /// A session with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64, recall_capacity: usize) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), recall_capacity)
    }

    fn with_rng(rng: SmallRng, recall_capacity: usize) -> Self {
        Self {
            history: HistoryLog::new(),
            recall: CommandRecall::new(recall_capacity),
            edit: EditBuffer::new(),
            game: GameState::new(),
            rng,
        }
    }

    /// Carry out what an action asked for.
    pub fn apply(&mut self, output: CommandOutput) {
        match output {
            CommandOutput::Lines(lines) => self.history.push_lines(EntryKind::Output, lines),
            CommandOutput::Clear { banner } => {
                self.history.clear();
                self.history.push_lines(EntryKind::Output, banner);
            },
            CommandOutput::StartGame { intro } => {
                self.game.start(&mut self.rng);
                self.history.push_lines(EntryKind::Output, intro);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::with_seed(7, 10);
        assert!(session.history.is_empty());
        assert!(session.recall.is_empty());
        assert_eq!(session.edit.text(), "");
        assert!(!session.game.is_active());
    }

    #[test]
    fn apply_lines() {
        let mut session = Session::with_seed(7, 10);
        session.apply(CommandOutput::Lines(vec!["a".into(), "b".into()]));
        assert_eq!(session.history.len(), 2);
    }

    #[test]
    fn apply_clear_leaves_only_banner() {
        let mut session = Session::with_seed(7, 10);
        session.apply(CommandOutput::Lines(vec!["old".into()]));
        session.apply(CommandOutput::Clear {
            banner: vec!["hi".into()],
        });
        let texts: Vec<&str> = session
            .history
            .entries()
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["hi"]);
    }

    #[test]
    fn apply_start_game_activates() {
        let mut session = Session::with_seed(7, 10);
        session.apply(CommandOutput::StartGame { intro: Vec::new() });
        assert!(session.game.is_active());
        assert!((1..=100).contains(&session.game.target()));
        assert!(session.history.is_empty());
    }

    #[test]
    fn same_seed_same_target() {
        let mut a = Session::with_seed(42, 10);
        let mut b = Session::with_seed(42, 10);
        a.apply(CommandOutput::StartGame { intro: Vec::new() });
        b.apply(CommandOutput::StartGame { intro: Vec::new() });
        assert_eq!(a.game.target(), b.game.target());
    }
}
