//! Selection type for the single-line input buffer.

/// A text selection with anchor (start point) and head (caret position),
/// both as character offsets.
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Extend selection to new head position
    pub fn extend_to(&mut self, offset: usize) {
        self.head = offset;
    }

    /// Collapse selection to head position
    pub fn collapse(&mut self) {
        self.anchor = self.head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_selection_range() {
        let sel = Selection::new(7, 2);
        assert_eq!(sel.start(), 2);
        assert_eq!(sel.end(), 7);
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_collapse() {
        let mut sel = Selection::new(0, 4);
        assert!(!sel.is_empty());
        sel.collapse();
        assert_eq!(sel, Selection::collapsed(4));
    }
}
