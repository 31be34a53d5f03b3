//! TextFieldState - pending text with caret, selection and constraints.

use crate::util::{char_type, CharType};

use super::buffer::StringBuffer;
use super::constraints::EditConstraints;
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::Selection;

/// Editable single-line text with one caret and one selection.
///
/// The caret is always the selection head.
#[derive(Debug, Clone, Default)]
pub struct TextFieldState {
    /// The text buffer
    pub buffer: StringBuffer,
    /// Selection (collapsed when there is only a caret)
    pub selection: Selection,
    /// Constraints for this field
    pub constraints: EditConstraints,
}

impl TextFieldState {
    /// Create a new field with the caret at the start
    pub fn new(buffer: StringBuffer, constraints: EditConstraints) -> Self {
        Self {
            buffer,
            selection: Selection::collapsed(0),
            constraints,
        }
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Caret offset in characters
    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer
            .slice(self.selection.start()..self.selection.end())
    }

    /// True when the whole (non-empty) text is selected
    pub fn is_all_selected(&self) -> bool {
        !self.buffer.is_empty()
            && self.selection.start() == 0
            && self.selection.end() == self.buffer.len_chars()
    }

    /// Collapse selection to caret position
    pub fn collapse_selection(&mut self) {
        self.selection.collapse();
    }

    /// Set the content, replacing everything. Caret moves to the end.
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.selection = Selection::collapsed(self.buffer.len_chars());
    }

    /// Replace the whole text with a value from the input surface, subject to
    /// the constraints. Returns true if the text changed.
    pub fn replace_all(&mut self, text: &str) -> bool {
        let accepted = self.constraints.sanitize(text);
        let changed = accepted != self.buffer.as_str();
        self.set_content(&accepted);
        changed
    }

    /// Apply a fine-grained edit. Returns true if the text changed.
    pub fn apply(&mut self, msg: &TextEditMsg) -> bool {
        match msg {
            TextEditMsg::Move(target) => {
                self.move_to(*target, false);
                false
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_to(*target, true);
                false
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(*ch),
            TextEditMsg::InsertText(text) => self.insert_text(text),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::DeleteWordBackward => self.delete_word_backward(),
            TextEditMsg::DeleteWordForward => self.delete_word_forward(),
            TextEditMsg::SelectAll => {
                self.select_all();
                false
            }
            TextEditMsg::CollapseSelection => {
                self.collapse_selection();
                false
            }
        }
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl TextFieldState {
    /// Move the caret to a target, optionally extending the selection
    pub fn move_to(&mut self, target: MoveTarget, extend_selection: bool) {
        match target {
            MoveTarget::Left => self.move_left(extend_selection),
            MoveTarget::Right => self.move_right(extend_selection),
            MoveTarget::WordLeft => self.move_word_left(extend_selection),
            MoveTarget::WordRight => self.move_word_right(extend_selection),
            MoveTarget::LineStart => self.set_caret(0, extend_selection),
            MoveTarget::LineEnd => self.set_caret(self.buffer.len_chars(), extend_selection),
        }
    }

    /// Move caret left by one character
    pub fn move_left(&mut self, extend_selection: bool) {
        // A plain move collapses an existing selection to its start
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            self.selection = Selection::collapsed(start);
            return;
        }
        let target = self.selection.head.saturating_sub(1);
        self.set_caret(target, extend_selection);
    }

    /// Move caret right by one character
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            self.selection = Selection::collapsed(end);
            return;
        }
        let target = (self.selection.head + 1).min(self.buffer.len_chars());
        self.set_caret(target, extend_selection);
    }

    /// Move caret by one word to the left
    pub fn move_word_left(&mut self, extend_selection: bool) {
        let target = self.word_left_offset(self.selection.head);
        self.set_caret(target, extend_selection);
    }

    /// Move caret by one word to the right
    pub fn move_word_right(&mut self, extend_selection: bool) {
        let target = self.word_right_offset(self.selection.head);
        self.set_caret(target, extend_selection);
    }

    /// Select all text
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.buffer.len_chars());
    }

    fn set_caret(&mut self, offset: usize, extend_selection: bool) {
        let offset = offset.min(self.buffer.len_chars());
        if extend_selection {
            self.selection.extend_to(offset);
        } else {
            self.selection = Selection::collapsed(offset);
        }
    }

    /// Start of the word before `from` (skips whitespace first)
    fn word_left_offset(&self, from: usize) -> usize {
        let chars: Vec<char> = self.buffer.as_str().chars().collect();
        let mut i = from.min(chars.len());

        while i > 0 && char_type(chars[i - 1]) == CharType::Whitespace {
            i -= 1;
        }
        if i > 0 {
            let kind = char_type(chars[i - 1]);
            while i > 0 && char_type(chars[i - 1]) == kind {
                i -= 1;
            }
        }
        i
    }

    /// Start of the word after `from` (skips the current run, then whitespace)
    fn word_right_offset(&self, from: usize) -> usize {
        let chars: Vec<char> = self.buffer.as_str().chars().collect();
        let len = chars.len();
        let mut i = from.min(len);

        if i < len {
            let kind = char_type(chars[i]);
            while i < len && char_type(chars[i]) == kind {
                i += 1;
            }
        }
        while i < len && char_type(chars[i]) == CharType::Whitespace {
            i += 1;
        }
        i
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl TextFieldState {
    /// Insert a character at the caret, replacing any selection.
    /// Returns true if the character was inserted, false if rejected by constraints
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.constraints.is_char_allowed(ch) {
            return false;
        }

        let remaining = self.buffer.len_chars() - self.selection.len();
        if self.constraints.would_exceed_max_length(remaining, 1) {
            return false;
        }

        let offset = self.remove_selection();
        self.buffer.insert_char(offset, ch);
        self.selection = Selection::collapsed(offset + 1);
        true
    }

    /// Insert text at the caret, replacing any selection.
    /// Returns true if the text was inserted
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if !text.chars().all(|ch| self.constraints.is_char_allowed(ch)) {
            return false;
        }

        let insert_len = text.chars().count();
        let remaining = self.buffer.len_chars() - self.selection.len();
        if self
            .constraints
            .would_exceed_max_length(remaining, insert_len)
        {
            return false;
        }

        let offset = self.remove_selection();
        self.buffer.insert(offset, text);
        self.selection = Selection::collapsed(offset + insert_len);
        true
    }

    /// Delete character before caret (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            self.remove_selection();
            return true;
        }

        let offset = self.selection.head;
        if offset == 0 {
            return false;
        }
        self.buffer.remove(offset - 1..offset);
        self.selection = Selection::collapsed(offset - 1);
        true
    }

    /// Delete character after caret (Delete key)
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            self.remove_selection();
            return true;
        }

        let offset = self.selection.head;
        if offset >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(offset..offset + 1);
        true
    }

    /// Delete word before caret
    pub fn delete_word_backward(&mut self) -> bool {
        if self.has_selection() {
            self.remove_selection();
            return true;
        }

        let end = self.selection.head;
        let start = self.word_left_offset(end);
        if start >= end {
            return false;
        }
        self.buffer.remove(start..end);
        self.selection = Selection::collapsed(start);
        true
    }

    /// Delete word after caret
    pub fn delete_word_forward(&mut self) -> bool {
        if self.has_selection() {
            self.remove_selection();
            return true;
        }

        let start = self.selection.head;
        let end = self.word_right_offset(start);
        if end <= start {
            return false;
        }
        self.buffer.remove(start..end);
        true
    }

    /// Remove the selected text (if any) and return the caret offset
    fn remove_selection(&mut self) -> usize {
        let start = self.selection.start();
        let end = self.selection.end();
        if start < end {
            self.buffer.remove(start..end);
        }
        self.selection = Selection::collapsed(start);
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state(text: &str) -> TextFieldState {
        TextFieldState::new(
            StringBuffer::from_text(text),
            EditConstraints::single_line(),
        )
    }

    #[test]
    fn test_replace_all_applies_constraints() {
        let mut state = TextFieldState::new(
            StringBuffer::from_text("abc"),
            EditConstraints::with_max_length(Some(3)),
        );

        assert!(state.replace_all("line one\nline two"));
        assert_eq!(state.as_str(), "lin");
        assert_eq!(state.cursor(), 3);

        assert!(!state.replace_all("lin\r\n"));
        assert_eq!(state.as_str(), "lin");
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = create_test_state("hello");
        state.selection = Selection::collapsed(2);

        state.move_left(false);
        assert_eq!(state.cursor(), 1);

        state.move_right(false);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_word_movement() {
        let mut state = create_test_state("hello world");

        state.move_word_right(false);
        assert_eq!(state.cursor(), 6); // After "hello " (at 'w')

        state.move_word_left(false);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_selection_extension() {
        let mut state = create_test_state("hello world");

        state.move_word_right(true);
        assert_eq!(state.selection().anchor, 0);
        assert_eq!(state.selection().head, 6);
        assert_eq!(state.selected_text(), "hello ");
    }

    #[test]
    fn test_select_all_then_type_replaces() {
        let mut state = create_test_state("Hello world");
        state.select_all();
        assert!(state.is_all_selected());

        assert!(state.insert_char('x'));
        assert_eq!(state.text(), "x");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_insert_at_caret_without_selection() {
        let mut state = create_test_state("Hello");
        state.selection = Selection::collapsed(0);

        state.insert_text("Oh, ");
        assert_eq!(state.text(), "Oh, Hello");
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_delete_backward_and_forward() {
        let mut state = create_test_state("abc");
        state.set_content("abc");

        assert!(state.delete_backward());
        assert_eq!(state.text(), "ab");

        state.selection = Selection::collapsed(0);
        assert!(state.delete_forward());
        assert_eq!(state.text(), "b");

        state.selection = Selection::collapsed(0);
        assert!(!state.delete_backward());
    }

    #[test]
    fn test_delete_word_backward() {
        let mut state = create_test_state("");
        state.set_content("rename this");

        assert!(state.delete_word_backward());
        assert_eq!(state.text(), "rename ");
        assert!(state.delete_word_backward());
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_newline_rejected() {
        let mut state = create_test_state("a");
        assert!(!state.insert_char('\n'));
        assert!(!state.insert_text("two\nlines"));
        assert_eq!(state.text(), "a");
    }

    #[test]
    fn test_max_length_counts_replaced_selection() {
        let mut state = TextFieldState::new(
            StringBuffer::from_text("abc"),
            EditConstraints::with_max_length(Some(3)),
        );
        state.set_content("abc");
        assert!(!state.insert_char('d'));

        state.select_all();
        assert!(state.insert_text("xyz"));
        assert_eq!(state.text(), "xyz");
    }

    #[test]
    fn test_apply_reports_text_changes_only() {
        let mut state = create_test_state("");
        state.set_content("abc");

        assert!(!state.apply(&TextEditMsg::Move(MoveTarget::LineStart)));
        assert_eq!(state.cursor(), 0);
        assert!(!state.apply(&TextEditMsg::SelectAll));
        assert!(state.apply(&TextEditMsg::InsertChar('z')));
        assert_eq!(state.text(), "z");
    }
}
