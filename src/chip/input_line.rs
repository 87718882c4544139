use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line text control that owns the pending (uncommitted) text.
///
/// The editor never tracks this text itself; it reads it from here when a
/// commit is about to happen.
#[derive(Debug, Default, Clone)]
pub struct InputLine {
    value: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self {
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Delete the last grapheme cluster, so combined characters and emoji
    /// disappear in one keystroke instead of decomposing.
    pub fn delete_back(&mut self) {
        if let Some((idx, _)) = self.value.grapheme_indices(true).next_back() {
            self.value.truncate(idx);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Display width in terminal columns, for cursor placement.
    pub fn width(&self) -> u16 {
        UnicodeWidthStr::width(self.value.as_str()) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_builds_value() {
        let mut input = InputLine::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.value(), "hi");
        assert!(!input.is_empty());
    }

    #[test]
    fn test_delete_back_removes_last_char() {
        let mut input = InputLine::new();
        input.insert('a');
        input.insert('b');
        input.delete_back();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_delete_back_on_empty_is_noop() {
        let mut input = InputLine::new();
        input.delete_back();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_delete_back_removes_whole_grapheme() {
        let mut input = InputLine::new();
        // "e" followed by a combining acute accent forms one grapheme
        input.insert('e');
        input.insert('\u{0301}');
        input.delete_back();
        assert!(input.is_empty());
    }

    #[test]
    fn test_width_counts_display_columns() {
        let mut input = InputLine::new();
        input.insert('a');
        assert_eq!(input.width(), 1);
        // CJK characters occupy two columns
        input.insert('你');
        assert_eq!(input.width(), 3);
    }

    #[test]
    fn test_clear_empties_value() {
        let mut input = InputLine::new();
        input.insert('x');
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.width(), 0);
    }
}
