//! Live syntax highlighting of the edit buffer.
//!
//! Roles are assigned from the same [`ParsedCommand`] the processor executes,
//! so the preview agrees with what submitting the line would do. Output is
//! HTML-ish markup: one `<span class="…">` per token, spaces as `&nbsp;`,
//! and a cursor marker at the cursor's char offset.

use crate::parser::{ParsedCommand, flag_name, next_non_blank, parse, strip_quotes};
use crate::processor::{VALUE_FLAG, recognized_flags};
use crate::registry::CommandRegistry;

const CURSOR_ON_CHAR_OPEN: &str = "<span class=\"cursor-on-char\">";
const CURSOR_AT_END: &str = "<span class=\"cursor-at-end\"></span>";
const SPAN_CLOSE: &str = "</span>";

/// Semantic role of a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Unstyled (whitespace).
    Plain,
    /// A command the registry knows.
    Command,
    /// An unknown command, flag, or stray argument.
    Unrecognized,
    /// A flag the command accepts.
    Flag,
    /// A flag value naming an existing sub-command.
    ValidValue,
    /// A flag value naming nothing.
    InvalidValue,
    /// Anything typed while the game is running.
    GameInput,
}

impl Role {
    /// CSS class used for the role.
    pub fn class(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Command => "text-green-400",
            Self::Unrecognized | Self::InvalidValue => "text-red-500",
            Self::Flag | Self::GameInput => "text-yellow-400",
            Self::ValidValue => "text-cyan-400",
        }
    }
}

/// A run of input text with one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub role: Role,
    pub text: &'a str,
}

/// Assign a role to every token of `parsed`.
pub fn classify<'a>(parsed: &ParsedCommand<'a>, registry: &CommandRegistry) -> Vec<Span<'a>> {
    let tokens = &parsed.tokens;
    let mut spans = Vec::with_capacity(tokens.len());
    let span = |role, i: usize| Span {
        role,
        text: tokens[i].text,
    };

    let Some(cmd_idx) = next_non_blank(tokens, 0) else {
        return tokens
            .iter()
            .map(|t| Span {
                role: Role::Plain,
                text: t.text,
            })
            .collect();
    };
    spans.extend((0..cmd_idx).map(|i| span(Role::Plain, i)));

    let def = registry.resolve(&parsed.command);
    spans.push(span(
        if def.is_some() {
            Role::Command
        } else {
            Role::Unrecognized
        },
        cmd_idx,
    ));

    let accepted = recognized_flags(&parsed.command);
    let mut i = cmd_idx + 1;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.is_blank() {
            spans.push(span(Role::Plain, i));
            i += 1;
            continue;
        }
        let Some(def) = def else {
            spans.push(span(Role::Unrecognized, i));
            i += 1;
            continue;
        };
        match flag_name(token) {
            Some(flag) if accepted.contains(&flag) => {
                spans.push(span(Role::Flag, i));
                if flag == VALUE_FLAG
                    && let Some(j) = next_non_blank(tokens, i + 1)
                    && flag_name(&tokens[j]).is_none()
                {
                    spans.extend((i + 1..j).map(|k| span(Role::Plain, k)));
                    let value = strip_quotes(tokens[j].trimmed());
                    let role = if def.sub_command(value).is_some() {
                        Role::ValidValue
                    } else {
                        Role::InvalidValue
                    };
                    spans.push(span(role, j));
                    i = j;
                }
            },
            _ => spans.push(span(Role::Unrecognized, i)),
        }
        i += 1;
    }

    spans
}

/// Push `ch` escaped for markup.
fn push_escaped(out: &mut String, ch: char) {
    match ch {
        ' ' => out.push_str("&nbsp;"),
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(ch),
    }
}

/// Render spans to markup with the cursor at char offset `cursor`.
pub fn render(spans: &[Span<'_>], cursor: usize) -> String {
    let mut out = String::new();
    let mut pos = 0;
    for span in spans {
        out.push_str("<span class=\"");
        out.push_str(span.role.class());
        out.push_str("\">");
        for ch in span.text.chars() {
            if pos == cursor {
                out.push_str(CURSOR_ON_CHAR_OPEN);
                push_escaped(&mut out, ch);
                out.push_str(SPAN_CLOSE);
            } else {
                push_escaped(&mut out, ch);
            }
            pos += 1;
        }
        out.push_str(SPAN_CLOSE);
    }
    if cursor >= pos {
        out.push_str(CURSOR_AT_END);
    }
    out
}

/// Highlight `input` with the cursor at char offset `cursor`.
///
/// While the game is active every character gets [`Role::GameInput`],
/// whatever the registry says.
pub fn highlight(
    input: &str,
    cursor: usize,
    registry: &CommandRegistry,
    game_active: bool,
) -> String {
    if game_active {
        return render(
            &[Span {
                role: Role::GameInput,
                text: input,
            }],
            cursor,
        );
    }
    let parsed = parse(input);
    render(&classify(&parsed, registry), cursor)
}

/// Remove cursor markers from highlight markup, keeping the character
/// under the cursor.
pub fn strip_cursor(markup: &str) -> String {
    let without_end = markup.replace(CURSOR_AT_END, "");
    let mut out = String::with_capacity(without_end.len());
    let mut rest = without_end.as_str();
    while let Some(start) = rest.find(CURSOR_ON_CHAR_OPEN) {
        out.push_str(&rest[..start]);
        let inner = &rest[start + CURSOR_ON_CHAR_OPEN.len()..];
        match inner.find(SPAN_CLOSE) {
            Some(end) => {
                out.push_str(&inner[..end]);
                rest = &inner[end + SPAN_CLOSE.len()..];
            },
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            },
        }
    }
    out.push_str(rest);
    out
}
