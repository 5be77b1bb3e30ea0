//! Single-line input shown inside the editing cell

/// Text of the edit input plus a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellInput {
    text: String,
    /// Cursor position in characters
    cursor: usize,
}

impl CellInput {
    /// Create an input seeded with a cell value, cursor at the end
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
            cursor: s.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.char_to_byte(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert text at the cursor, dropping line breaks
    pub fn insert_text(&mut self, s: &str) {
        for ch in s.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(ch);
        }
    }

    /// Delete the character before the cursor. Returns true if text changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.char_to_byte(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len_chars() {
            return false;
        }
        let at = self.char_to_byte(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len_chars();
    }

    /// Replace the whole text, cursor at the end
    pub fn set_text(&mut self, s: &str) {
        *self = Self::from_text(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_cursor_at_end() {
        let input = CellInput::from_text("hello");
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = CellInput::from_text("ab");
        input.move_left();
        input.insert_char('X');

        assert_eq!(input.text(), "aXb");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_delete_backward_and_forward() {
        let mut input = CellInput::from_text("abc");
        input.move_left();
        assert!(input.delete_backward());
        assert_eq!(input.text(), "ac");

        input.move_home();
        assert!(!input.delete_backward());
        assert!(input.delete_forward());
        assert_eq!(input.text(), "c");

        input.move_end();
        assert!(!input.delete_forward());
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = CellInput::from_text("6,200 ₹");
        assert!(input.delete_backward());
        assert_eq!(input.text(), "6,200 ");
        input.insert_char('€');
        assert_eq!(input.text(), "6,200 €");
    }

    #[test]
    fn test_insert_text_strips_newlines() {
        let mut input = CellInput::default();
        input.insert_text("Q4\r\nplan");
        assert_eq!(input.text(), "Q4plan");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = CellInput::from_text("x");
        input.move_right();
        assert_eq!(input.cursor(), 1);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }
}
