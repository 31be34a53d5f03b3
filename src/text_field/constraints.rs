//! Edit constraints for the input surface.
//!
//! Constraints define which characters and how much text the pending value may hold.

/// Constraints that limit what the input surface accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,
}

impl EditConstraints {
    /// Plain single-line input: any character except line breaks
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Single-line input limited to `max` characters
    pub fn with_max_length(max: Option<usize>) -> Self {
        Self { max_length: max }
    }

    /// Check if a character may enter the pending value (line breaks never do)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        ch != '\n' && ch != '\r'
    }

    /// Apply the constraints to a whole replacement value.
    ///
    /// Line breaks are dropped and the result is cut to `max_length` characters.
    pub fn sanitize(&self, text: &str) -> String {
        let allowed = text.chars().filter(|&c| self.is_char_allowed(c));
        match self.max_length {
            Some(max) => allowed.take(max).collect(),
            None => allowed.collect(),
        }
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        if let Some(max) = self.max_length {
            current_len + insert_len > max
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_rejects_newlines() {
        let c = EditConstraints::single_line();
        assert!(c.is_char_allowed('a'));
        assert!(!c.is_char_allowed('\n'));
        assert!(!c.is_char_allowed('\r'));
    }

    #[test]
    fn test_sanitize_strips_line_breaks_then_truncates() {
        let c = EditConstraints::with_max_length(Some(8));
        assert_eq!(c.sanitize("line one\r\nline two"), "line one");
        assert_eq!(c.sanitize("ab\ncd"), "abcd");

        let unlimited = EditConstraints::single_line();
        assert_eq!(unlimited.sanitize("a\nb\rc"), "abc");
    }

    #[test]
    fn test_max_length() {
        let c = EditConstraints::with_max_length(Some(5));
        assert!(!c.would_exceed_max_length(3, 2));
        assert!(c.would_exceed_max_length(3, 3));

        let unlimited = EditConstraints::single_line();
        assert!(!unlimited.would_exceed_max_length(1000, 1000));
    }
}
