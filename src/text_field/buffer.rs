//! Single-line text buffer backing the input surface.
//!
//! All offsets are character offsets, not byte offsets.

use std::ops::Range;

/// Text buffer wrapping a `String`. Used for the pending value while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get full content as an owned String
    pub fn content(&self) -> String {
        self.text.clone()
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get slice of text as String (by character offsets, clamped)
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    /// Insert text at character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    /// Insert single character at character offset
    pub fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    /// Remove text in character range
    pub fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        if start_byte < end_byte {
            self.text.replace_range(start_byte..end_byte, "");
        }
    }

    /// Set content, replacing everything
    pub fn set_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove() {
        let mut buf = StringBuffer::from_text("hello");
        buf.insert(5, " world");
        assert_eq!(buf.as_str(), "hello world");

        buf.remove(0..6);
        assert_eq!(buf.as_str(), "world");
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut buf = StringBuffer::from_text("héllo");
        assert_eq!(buf.len_chars(), 5);

        buf.insert_char(2, 'x');
        assert_eq!(buf.as_str(), "héxllo");
        assert_eq!(buf.slice(1..3), "éx");
    }

    #[test]
    fn test_slice_clamps_out_of_range() {
        let buf = StringBuffer::from_text("abc");
        assert_eq!(buf.slice(1..10), "bc");
        assert_eq!(buf.slice(5..10), "");
    }

    #[test]
    fn test_set_content() {
        let mut buf = StringBuffer::from_text("old");
        buf.set_content("new value");
        assert_eq!(buf.content(), "new value");
        assert!(!buf.is_empty());
    }
}
