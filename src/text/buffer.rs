//! Petition buffer with selection and undo/redo history
//!
//! The buffer stores the content string and nothing else of the document.
//! Edits are computed elsewhere (markup, templates) as whole new contents;
//! the buffer reduces each one to the changed character span so history
//! stays small.

use super::cursor::{char_len, char_to_byte, Selection, TextRange};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of edits kept for undo
pub const DEFAULT_HISTORY: usize = 100;

/// Result of an edit operation: the new buffer and where the cursor goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    pub content: String,
    pub cursor: usize,
}

impl EditResult {
    pub fn new(content: String, cursor: usize) -> Self {
        Self { content, cursor }
    }
}

/// One reversible replacement of a character span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Character offset where the change starts
    pub start: usize,
    pub old_text: String,
    pub new_text: String,
    pub cursor_before: usize,
    pub cursor_after: usize,
}

impl TextEdit {
    /// Smallest edit that turns `old` into `new`
    pub fn between(old: &str, new: &str, cursor_before: usize, cursor_after: usize) -> Self {
        let prefix = old
            .chars()
            .zip(new.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let old_rest: Vec<char> = old.chars().skip(prefix).collect();
        let new_rest: Vec<char> = new.chars().skip(prefix).collect();
        let suffix = old_rest
            .iter()
            .rev()
            .zip(new_rest.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        Self {
            start: prefix,
            old_text: old_rest[..old_rest.len() - suffix].iter().collect(),
            new_text: new_rest[..new_rest.len() - suffix].iter().collect(),
            cursor_before,
            cursor_after,
        }
    }

    fn replace(content: &mut String, start: usize, remove: &str, insert: &str) {
        let from = char_to_byte(content, start);
        let to = char_to_byte(content, start + char_len(remove));
        content.replace_range(from..to, insert);
    }

    fn revert(&self, content: &mut String) {
        Self::replace(content, self.start, &self.new_text, &self.old_text);
    }

    fn reapply(&self, content: &mut String) {
        Self::replace(content, self.start, &self.old_text, &self.new_text);
    }
}

/// Editing buffer owned by the hosting screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetitionBuffer {
    content: String,
    selection: Selection,
    undo_stack: VecDeque<TextEdit>,
    redo_stack: Vec<TextEdit>,
    max_history: usize,
}

impl PetitionBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::with_capacity(String::new(), DEFAULT_HISTORY)
    }

    /// Create a buffer holding previously saved content
    pub fn from_content(content: impl Into<String>) -> Self {
        Self::with_capacity(content, DEFAULT_HISTORY)
    }

    pub fn with_capacity(content: impl Into<String>, max_history: usize) -> Self {
        Self {
            content: content.into(),
            selection: Selection::collapsed(0),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_history,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Selected range, clamped to the current content
    pub fn selected_range(&self) -> TextRange {
        self.selection.range().clamped(char_len(&self.content))
    }

    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn set_selection(&mut self, anchor: usize, head: usize) {
        let len = char_len(&self.content);
        self.selection = Selection::new(anchor.min(len), head.min(len));
    }

    /// Replace the whole content (e.g. after loading); history is discarded
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.selection = Selection::collapsed(0);
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Commit an edit result, recording it for undo
    pub fn apply(&mut self, result: EditResult) {
        let cursor_before = self.cursor();
        if result.content != self.content {
            let edit = TextEdit::between(&self.content, &result.content, cursor_before, result.cursor);
            self.push_undo(edit);
            self.content = result.content;
        }
        let cursor = result.cursor.min(char_len(&self.content));
        self.selection = Selection::collapsed(cursor);
    }

    fn push_undo(&mut self, edit: TextEdit) {
        if self.max_history == 0 {
            return;
        }
        if self.undo_stack.len() == self.max_history {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(edit);
        self.redo_stack.clear();
    }

    /// Undo the last edit
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop_back() {
            Some(edit) => {
                edit.revert(&mut self.content);
                self.selection = Selection::collapsed(edit.cursor_before);
                self.redo_stack.push(edit);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(edit) => {
                edit.reapply(&mut self.content);
                self.selection = Selection::collapsed(edit.cursor_after);
                self.undo_stack.push_back(edit);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl Default for PetitionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_between_finds_changed_span() {
        let edit = TextEdit::between("abc def", "abc **def**", 4, 11);
        assert_eq!(edit.start, 4);
        assert_eq!(edit.old_text, "def");
        assert_eq!(edit.new_text, "**def**");

        let edit = TextEdit::between("a\nb", "a\n# b", 2, 4);
        assert_eq!(edit.start, 2);
        assert_eq!(edit.old_text, "");
        assert_eq!(edit.new_text, "# ");
    }

    #[test]
    fn test_apply_undo_redo() {
        let mut buffer = PetitionBuffer::from_content("ação");
        buffer.apply(EditResult::new("ação civil".to_string(), 10));
        assert_eq!(buffer.content(), "ação civil");
        assert_eq!(buffer.cursor(), 10);

        assert!(buffer.undo());
        assert_eq!(buffer.content(), "ação");
        assert_eq!(buffer.cursor(), 0);
        assert!(!buffer.can_undo());

        assert!(buffer.redo());
        assert_eq!(buffer.content(), "ação civil");
        assert_eq!(buffer.cursor(), 10);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut buffer = PetitionBuffer::new();
        buffer.apply(EditResult::new("a".to_string(), 1));
        buffer.undo();
        assert!(buffer.can_redo());

        buffer.apply(EditResult::new("b".to_string(), 1));
        assert!(!buffer.can_redo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut buffer = PetitionBuffer::with_capacity("", 2);
        buffer.apply(EditResult::new("1".to_string(), 1));
        buffer.apply(EditResult::new("12".to_string(), 2));
        buffer.apply(EditResult::new("123".to_string(), 3));

        assert!(buffer.undo());
        assert!(buffer.undo());
        assert!(!buffer.undo());
        assert_eq!(buffer.content(), "1");
    }

    #[test]
    fn test_unchanged_content_moves_cursor_only() {
        let mut buffer = PetitionBuffer::from_content("abc");
        buffer.apply(EditResult::new("abc".to_string(), 2));
        assert_eq!(buffer.cursor(), 2);
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_selection_clamped() {
        let mut buffer = PetitionBuffer::from_content("abc");
        buffer.set_selection(10, 1);
        assert_eq!(buffer.selected_range(), TextRange::new(1, 3));
    }
}
