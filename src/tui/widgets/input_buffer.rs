//! Single-line text input with cursor management.
//!
//! Used by the advisor chat for the question being typed.

/// A single-line input buffer. The cursor is a byte offset that always sits
/// on a char boundary.
#[derive(Debug, Default)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        // Single-line: newlines from pastes become spaces.
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.content.drain(self.cursor..next);
        }
    }

    /// Delete the word before the cursor (Ctrl+W).
    pub fn delete_word(&mut self) {
        let before = &self.content[..self.cursor];
        let trimmed = before.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.content.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Slice of the content that fits in `width` columns with the cursor
    /// visible, plus the cursor's column within that slice. Counts chars,
    /// not display width.
    pub fn visible_window(&self, width: usize) -> (&str, usize) {
        if width == 0 {
            return ("", 0);
        }
        let cursor_chars = self.content[..self.cursor].chars().count();
        // Leave one column for the cursor block at the end of the line.
        let skip = (cursor_chars + 1).saturating_sub(width);

        let start = self.byte_at_char(skip);
        let end = self.byte_at_char(skip + width);
        (&self.content[start..end], cursor_chars - skip)
    }

    fn byte_at_char(&self, n: usize) -> usize {
        self.content
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
