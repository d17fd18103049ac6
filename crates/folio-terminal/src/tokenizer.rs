//! Lossless tokenizer.
//!
//! Unlike a shell tokenizer, whitespace is kept as tokens and quotes are kept
//! inside the tokens that carry them, so the highlighter can re-render the
//! input character for character.
//!
//! Character classes: quote (`"` or `'`), whitespace (`char::is_whitespace`),
//! other. A token is one of:
//!
//! - a quoted run: a quote up to and including the next identical quote on
//!   the same line;
//! - a maximal run of whitespace;
//! - a maximal run of anything else.
//!
//! A quote without a closing partner is just an ordinary character, so
//! unterminated strings lex as words instead of failing.

/// What a token is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace.
    Whitespace,
    /// A quoted run, quotes included.
    Quoted,
    /// A run of non-whitespace characters.
    Word,
}

/// A slice of the input with its lexical kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// The token text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Whether the token is blank (whitespace only).
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Number of characters in the token.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

/// Quoted runs never cross a line break.
fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Byte length of a quoted run starting at the beginning of `rest`, or `None`
/// if the opening quote is never closed on this line.
fn quoted_len(rest: &str, quote: char) -> Option<usize> {
    for (i, ch) in rest.char_indices().skip(1) {
        if ch == quote {
            return Some(i + ch.len_utf8());
        }
        if is_line_terminator(ch) {
            return None;
        }
    }
    None
}

/// Byte length of the longest prefix of `rest` whose chars satisfy `pred`.
fn run_len(rest: &str, pred: impl Fn(char) -> bool) -> usize {
    rest.char_indices()
        .find(|&(_, ch)| !pred(ch))
        .map_or(rest.len(), |(i, _)| i)
}

/// Split `input` into tokens. Concatenating the token texts reproduces
/// `input` exactly and no token is empty.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(first) = input[pos..].chars().next() {
        let rest = &input[pos..];
        let (kind, len) = if let Some(len) = is_quote(first)
            .then(|| quoted_len(rest, first))
            .flatten()
        {
            (TokenKind::Quoted, len)
        } else if first.is_whitespace() {
            (TokenKind::Whitespace, run_len(rest, char::is_whitespace))
        } else {
            (TokenKind::Word, run_len(rest, |c| !c.is_whitespace()))
        };
        tokens.push(Token {
            kind,
            text: &rest[..len],
        });
        pos += len;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).iter().map(|t| t.text).collect()
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn tokenize_simple() {
        assert_eq!(texts("hello world"), vec!["hello", " ", "world"]);
    }

    #[test]
    fn whitespace_runs_are_preserved() {
        let tokens = tokenize("  ls \t -a  ");
        assert_eq!(
            tokens.iter().map(|t| t.text).collect::<Vec<_>>(),
            vec!["  ", "ls", " \t ", "-a", "  "]
        );
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].kind, TokenKind::Word);
    }

    #[test]
    fn tokenize_double_quotes() {
        let tokens = tokenize(r#"experience --company "Acme Corp""#);
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[4].text, "\"Acme Corp\"");
        assert_eq!(tokens[4].kind, TokenKind::Quoted);
    }

    #[test]
    fn tokenize_single_quotes() {
        assert_eq!(texts("echo 'a b'"), vec!["echo", " ", "'a b'"]);
    }

    #[test]
    fn quoted_run_is_non_greedy() {
        assert_eq!(texts(r#""a" "b""#), vec!["\"a\"", " ", "\"b\""]);
    }

    #[test]
    fn mismatched_quote_does_not_close() {
        assert_eq!(texts(r#""it's here""#), vec!["\"it's here\""]);
        assert_eq!(texts(r#"'say "hi"'"#), vec!["'say \"hi\"'"]);
    }

    #[test]
    fn tokenize_unterminated_double() {
        let tokens = tokenize(r#"echo "unterminated string"#);
        assert_eq!(
            tokens.iter().map(|t| t.text).collect::<Vec<_>>(),
            vec!["echo", " ", "\"unterminated", " ", "string"]
        );
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Quoted));
    }

    #[test]
    fn tokenize_unterminated_single() {
        assert_eq!(texts("'oops"), vec!["'oops"]);
    }

    #[test]
    fn quote_in_middle_of_word_stays_in_word() {
        assert_eq!(texts(r#"abc"def ghi""#), vec!["abc\"def", " ", "ghi\""]);
    }

    #[test]
    fn quoted_run_stops_at_line_break() {
        assert_eq!(texts("\"a\nb\""), vec!["\"a", "\n", "b\""]);
    }

    #[test]
    fn empty_quotes_are_a_token() {
        let tokens = tokenize(r#"--company """#);
        assert_eq!(tokens[2].text, "\"\"");
        assert_eq!(tokens[2].kind, TokenKind::Quoted);
    }

    #[test]
    fn unicode_input() {
        assert_eq!(texts("héllo 🏡 wörld"), vec!["héllo", " ", "🏡", " ", "wörld"]);
        assert_eq!(tokenize("🏡")[0].char_len(), 1);
    }

    #[test]
    fn blank_detection() {
        let tokens = tokenize(" x");
        assert!(tokens[0].is_blank());
        assert!(!tokens[1].is_blank());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tokens_reconstruct_input(input in "[a-z \"'\\t\\n-]{0,60}") {
                let joined: String = tokenize(&input).iter().map(|t| t.text).collect();
                prop_assert_eq!(joined, input);
            }

            #[test]
            fn tokens_are_never_empty(input in "\\PC{0,60}") {
                prop_assert!(tokenize(&input).iter().all(|t| !t.text.is_empty()));
            }

            #[test]
            fn whitespace_tokens_are_all_whitespace(input in "[a-z \"'\\t]{0,60}") {
                for t in tokenize(&input) {
                    if t.kind == TokenKind::Whitespace {
                        prop_assert!(t.text.chars().all(char::is_whitespace));
                    }
                }
            }
        }
    }
}
