//! Offset and line conversions.
//!
//! A rope-backed index over a text, answering the coordinate questions the
//! rest of the kernel (and parsing integrations) keep asking: character ↔
//! byte offsets, character offset ↔ line, and the `(row, byte-column)` points
//! an incremental parser wants for edit positions. O(log n) per query.

use ropey::Rope;

/// Rope-backed coordinate index over a text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// An index over the empty text.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build an index from `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Character count of the indexed text.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Byte count of the indexed text.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Line count (a trailing newline opens one more, empty, line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Insert `text` at a character offset (clamped to the text length).
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let at = char_offset.min(self.rope.len_chars());
        self.rope.insert(at, text);
    }

    /// Delete `char_len` characters starting at a character offset
    /// (both clamped to the text length).
    pub fn delete(&mut self, char_offset: usize, char_len: usize) {
        let start = char_offset.min(self.rope.len_chars());
        let end = start.saturating_add(char_len).min(self.rope.len_chars());
        self.rope.remove(start..end);
    }

    /// Convert a character offset to a byte offset (clamped).
    pub fn char_to_byte(&self, char_offset: usize) -> usize {
        let at = char_offset.min(self.rope.len_chars());
        self.rope.char_to_byte(at)
    }

    /// Convert a byte offset to a character offset (clamped).
    pub fn byte_to_char(&self, byte_offset: usize) -> usize {
        let at = byte_offset.min(self.rope.len_bytes());
        self.rope.byte_to_char(at)
    }

    /// Line containing a character offset (clamped).
    pub fn char_to_line(&self, char_offset: usize) -> usize {
        let at = char_offset.min(self.rope.len_chars());
        self.rope.char_to_line(at)
    }

    /// Character offset of the first character of `line` (clamped).
    pub fn line_to_char(&self, line: usize) -> usize {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(line)
    }

    /// `(row, byte column)` of a character offset, the coordinate pair
    /// incremental parsers express edit positions in.
    pub fn char_to_point(&self, char_offset: usize) -> (usize, usize) {
        let at = char_offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(at);
        let column = self.rope.char_to_byte(at) - self.rope.line_to_byte(row);
        (row, column)
    }

    /// The indexed text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
