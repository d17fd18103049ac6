//! Command resolver: command name plus `--flag [value]` arguments.

use std::collections::BTreeMap;

use crate::tokenizer::{Token, tokenize};

/// Marker that turns a token into a flag.
pub const FLAG_PREFIX: &str = "--";

/// Value attached to a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag was given without a value.
    Present,
    /// The flag was followed by a value (quotes already stripped).
    Text(String),
}

impl FlagValue {
    /// Whether the flag counts as given: present without a value, or with a
    /// non-empty one.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Present => true,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// The string value, if one was given.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Present => None,
        }
    }
}

/// Flags of a parsed command, keyed by name as typed (case-sensitive).
pub type Args = BTreeMap<String, FlagValue>;

/// The result of resolving one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// Lowercased command name; empty for blank input.
    pub command: String,
    /// Flags in name order. A repeated flag keeps its last value.
    pub args: Args,
    /// Every token of the input, whitespace included.
    pub tokens: Vec<Token<'a>>,
}

/// Strip one leading and one trailing quote character, independently.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

/// Name of the flag carried by `token`, if the token is a flag.
pub fn flag_name<'a>(token: &Token<'a>) -> Option<&'a str> {
    token.trimmed().strip_prefix(FLAG_PREFIX)
}

/// Index of the first non-blank token at or after `from`.
pub(crate) fn next_non_blank(tokens: &[Token<'_>], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| !tokens[i].is_blank())
}

/// Resolve a token sequence into a command name and flags.
///
/// The command is the first non-blank token. After it, each flag token
/// takes the next non-blank token as its value unless that token is itself
/// a flag. Tokens that are neither flags nor flag values are ignored.
pub fn resolve<'a>(tokens: Vec<Token<'a>>) -> ParsedCommand<'a> {
    let Some(cmd_idx) = next_non_blank(&tokens, 0) else {
        return ParsedCommand {
            command: String::new(),
            args: Args::new(),
            tokens,
        };
    };
    let command = strip_quotes(tokens[cmd_idx].trimmed()).to_lowercase();

    let mut args = Args::new();
    let mut i = cmd_idx + 1;
    while i < tokens.len() {
        if let Some(flag) = flag_name(&tokens[i]) {
            let value = next_non_blank(&tokens, i + 1)
                .filter(|&j| flag_name(&tokens[j]).is_none());
            match value {
                Some(j) => {
                    let text = strip_quotes(tokens[j].trimmed()).to_string();
                    args.insert(flag.to_string(), FlagValue::Text(text));
                    i = j;
                },
                None => {
                    args.insert(flag.to_string(), FlagValue::Present);
                },
            }
        }
        i += 1;
    }

    ParsedCommand {
        command,
        args,
        tokens,
    }
}

/// Tokenize and resolve a line of input.
pub fn parse(input: &str) -> ParsedCommand<'_> {
    resolve(tokenize(input))
}
