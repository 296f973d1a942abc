//! Text input state

use unicode_width::UnicodeWidthStr;

/// A single-line text input: value, byte-offset cursor, optional inline
/// error.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text value
    value: String,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Placeholder shown while empty
    placeholder: String,
    /// Validation error message (if any)
    error: Option<String>,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the placeholder text
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Display column of the cursor, accounting for wide characters
    pub fn cursor_column(&self) -> u16 {
        self.value[..self.cursor].width() as u16
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value, moving the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
        self.error = None;
    }

    /// Clear the input value
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.error = None;
    }

    // -------------------------------------------------------------------------
    // Text manipulation (called by the event loop on key events)
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.error = None;
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev);
            self.cursor = prev;
            self.error = None;
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
            self.error = None;
        }
    }

    /// Move cursor left one character
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move cursor right one character
    pub fn cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }

    // -------------------------------------------------------------------------
    // Validation display
    // -------------------------------------------------------------------------

    /// Set the inline error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Clear the inline error
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Get the inline error message (if any)
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut input = TextInput::new();
        input.insert_char('a');
        input.insert_char('b');
        input.insert_char('c');
        assert_eq!(input.value(), "abc");

        input.delete_char_before();
        assert_eq!(input.value(), "ab");

        input.cursor_home();
        input.delete_char_at();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_cursor_moves_on_char_boundaries() {
        let mut input = TextInput::new();
        input.insert_char('é');
        input.insert_char('x');
        input.cursor_left();
        input.cursor_left();
        input.insert_char('a');
        assert_eq!(input.value(), "aéx");
    }

    #[test]
    fn test_insert_mid_value() {
        let mut input = TextInput::new();
        input.set_value("ac");
        input.cursor_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_editing_clears_error() {
        let mut input = TextInput::new();
        input.set_error("*Full Name is required");
        assert_eq!(input.error(), Some("*Full Name is required"));

        input.insert_char('A');
        assert_eq!(input.error(), None);
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let mut input = TextInput::new();
        input.set_value("漢a");
        assert_eq!(input.cursor_column(), 3);
        input.cursor_left();
        input.cursor_left();
        assert_eq!(input.cursor_column(), 0);
    }
}
