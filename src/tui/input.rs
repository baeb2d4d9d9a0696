//! Input handling for TUI
//!
//! Key classification helpers and the search box text buffer.

use crossterm::event::{KeyCode, KeyModifiers};

/// Key event representation
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Check if this is Ctrl+C
    pub fn is_interrupt(&self) -> bool {
        self.code == KeyCode::Char('c') && self.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Check if this is a quit key (q or Ctrl+C)
    pub fn is_quit(&self) -> bool {
        self.is_interrupt() || (self.code == KeyCode::Char('q') && !self.has_control())
    }

    /// Check if this is Ctrl+U (clear line)
    pub fn is_clear_line(&self) -> bool {
        self.code == KeyCode::Char('u') && self.has_control()
    }

    /// Check if this is the escape key
    pub fn is_escape(&self) -> bool {
        self.code == KeyCode::Esc
    }

    /// Check if this is the enter key
    pub fn is_enter(&self) -> bool {
        self.code == KeyCode::Enter
    }

    /// Check if this is the tab key
    pub fn is_tab(&self) -> bool {
        self.code == KeyCode::Tab
    }

    /// Check if this is the up arrow key
    pub fn is_up(&self) -> bool {
        self.code == KeyCode::Up
    }

    /// Check if this is the down arrow key
    pub fn is_down(&self) -> bool {
        self.code == KeyCode::Down
    }

    /// Get the character if this is a plain char key
    pub fn char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.has_control() => Some(c),
            _ => None,
        }
    }

    fn has_control(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(key: crossterm::event::KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Text input buffer for handling text entry
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The text content
    content: String,
    /// Cursor position (byte offset)
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial content
    pub fn with_content(content: &str) -> Self {
        let len = content.len();
        Self {
            content: content.to_string(),
            cursor: len,
        }
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters before the cursor
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.prev_char_boundary(self.cursor);
            self.content.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary(self.cursor);
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor = self.next_char_boundary(self.cursor);
        }
    }

    /// Move cursor to start
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Handle an editing key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(c) = key.char() {
            self.insert(c);
            return true;
        }
        match key.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Find the previous character boundary
    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos.saturating_sub(1);
        while idx > 0 && !self.content.is_char_boundary(idx) {
            idx -= 1;
        }
        idx
    }

    /// Find the next character boundary
    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos + 1;
        while idx < self.content.len() && !self.content.is_char_boundary(idx) {
            idx += 1;
        }
        idx.min(self.content.len())
    }
}
