//! Message types for editing the pending value.

/// Target for caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move one word left
    WordLeft,
    /// Move one word right
    WordRight,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
}

/// Fine-grained edit forwarded by the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move caret without affecting selection
    Move(MoveTarget),
    /// Move caret and extend selection
    MoveWithSelection(MoveTarget),

    // === Insertion ===
    /// Insert a single character
    InsertChar(char),
    /// Insert a string (e.g., from paste or IME commit)
    InsertText(String),

    // === Deletion ===
    /// Delete character before caret (Backspace)
    DeleteBackward,
    /// Delete character after caret (Delete)
    DeleteForward,
    /// Delete word before caret (Ctrl/Option+Backspace)
    DeleteWordBackward,
    /// Delete word after caret (Ctrl/Option+Delete)
    DeleteWordForward,

    // === Selection ===
    /// Select all text
    SelectAll,
    /// Collapse selection to caret position
    CollapseSelection,
}
