//! Command interpreter for the folio terminal.
//!
//! Input lines are tokenized, resolved into a command name plus flags, and
//! dispatched against an immutable [`CommandRegistry`] built from portfolio
//! content. The same parse drives the live highlighter, so the preview never
//! disagrees with execution. A number-guessing game can take over input until
//! it ends.

mod builtins;
pub mod game;
pub mod highlight;
mod history;
pub mod parser;
mod processor;
mod recall;
mod registry;
mod session;
mod terminal;
pub mod tokenizer;

/// Attach the built-in `clear` and `game` actions to a registry builder.
pub use builtins::register_builtins;
/// The guessing game state machine.
pub use game::GameState;
/// Render highlight markup for an input line.
pub use highlight::highlight;
/// Scrollback entries and the log that holds them.
pub use history::{EntryKind, HistoryEntry, HistoryLog, Reply};
/// Resolve and parse input lines.
pub use parser::{Args, FlagValue, ParsedCommand, parse};
/// Dispatch a submitted line.
pub use processor::{EXPERIENCE, VALUE_FLAG, process_command, recognized_flags};
/// Edit buffer and bounded command recall.
pub use recall::{CommandRecall, EditBuffer};
/// Behavior trait, command definitions, and the registry.
pub use registry::{
    Action, CommandDef, CommandOutput, CommandRegistry, RegistryBuilder, SubCommand,
};
/// Per-user mutable state.
pub use session::Session;
/// A registry plus one session, driven a line at a time.
pub use terminal::Terminal;
/// Split input into lossless tokens.
pub use tokenizer::{Token, TokenKind, tokenize};
