//! Edit buffer and bounded command recall.

use std::collections::VecDeque;

/// The line being edited, with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    /// Cursor position as a char index; `char_len()` means "after the end".
    cursor: usize,
}

impl EditBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the char at `idx` (or the end of the text).
    fn byte_pos(&self, idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Replace the contents and put the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_len();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let byte_pos = self.byte_pos(self.cursor);
        self.text.insert(byte_pos, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_pos = self.byte_pos(self.cursor);
            self.text.remove(byte_pos);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let byte_pos = self.byte_pos(self.cursor);
            self.text.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_len();
    }
}

/// The last few submitted commands, navigable with previous/next.
#[derive(Debug, Clone)]
pub struct CommandRecall {
    commands: VecDeque<String>,
    capacity: usize,
    /// Recall position; `commands.len()` means "past the newest".
    index: usize,
}

impl CommandRecall {
    /// Create an empty recall buffer holding at most `capacity` commands.
    pub fn new(capacity: usize) -> Self {
        Self {
            commands: VecDeque::new(),
            capacity: capacity.max(1),
            index: 0,
        }
    }

    /// Record a submitted command, evicting the oldest beyond capacity, and
    /// reset the recall position past the newest entry.
    pub fn record(&mut self, command: &str) {
        self.commands.push_back(command.to_string());
        while self.commands.len() > self.capacity {
            self.commands.pop_front();
        }
        self.index = self.commands.len();
    }

    /// Step to the previous (older) command and load it into `edit`.
    /// Stays on the oldest command once reached.
    pub fn previous(&mut self, edit: &mut EditBuffer) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        edit.set(&self.commands[self.index]);
    }

    /// Step to the next (newer) command. Stepping past the newest empties
    /// `edit`.
    pub fn next(&mut self, edit: &mut EditBuffer) {
        if self.index >= self.commands.len() {
            return;
        }
        self.index += 1;
        match self.commands.get(self.index) {
            Some(cmd) => edit.set(cmd),
            None => {
                edit.take();
            },
        }
    }

    /// Commands from oldest to newest.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
