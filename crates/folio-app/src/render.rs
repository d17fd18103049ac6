//! Plain-text rendering of history markup for a line-oriented console.

use folio_terminal::{EntryKind, HistoryEntry};

/// Strip tags and decode the entities the highlighter emits.
pub fn plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {},
        }
    }
    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// One console line for a history entry. Input echoes get the prompt.
pub fn entry_line(entry: &HistoryEntry, prompt: &str) -> String {
    let text = plain_text(&entry.text);
    match entry.kind {
        EntryKind::Input => format!("{prompt} {text}"),
        EntryKind::Output | EntryKind::Error => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spans() {
        assert_eq!(
            plain_text("<span class=\"text-green-400\">about</span>"),
            "about"
        );
    }

    #[test]
    fn decodes_entities_once() {
        assert_eq!(
            plain_text("a&nbsp;&lt;b&gt;&nbsp;&amp;lt;"),
            "a <b> &lt;"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(plain_text("Type `help` 🏡"), "Type `help` 🏡");
    }

    #[test]
    fn input_gets_prompt() {
        let entry = HistoryEntry {
            id: 0,
            kind: EntryKind::Input,
            text: "<span class=\"text-red-500\">nope</span>".to_string(),
        };
        assert_eq!(entry_line(&entry, "$"), "$ nope");
    }

    #[test]
    fn output_has_no_prompt() {
        let entry = HistoryEntry {
            id: 1,
            kind: EntryKind::Error,
            text: "Command not found: nope".to_string(),
        };
        assert_eq!(entry_line(&entry, "$"), "Command not found: nope");
    }
}
