//! Character offsets and selection ranges over the petition buffer
//!
//! All positions in the core are character (Unicode scalar value) offsets.
//! Browser textareas report UTF-16 code units, so the conversions live here
//! as well and are applied only at the API boundary.

use serde::{Deserialize, Serialize};

/// A half-open range of characters, `start` inclusive, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-length range (caret)
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    /// Order the endpoints so that `start <= end`
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }

    /// Normalize and clamp both endpoints to `len`
    pub fn clamped(self, len: usize) -> Self {
        let range = self.normalized();
        Self::new(range.start.min(len), range.end.min(len))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// Selection state (anchor + head)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Where the selection started
    pub anchor: usize,
    /// Current cursor position
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn collapsed(pos: usize) -> Self {
        Self { anchor: pos, head: pos }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// The range covered by this selection (ordered start to end)
    pub fn range(&self) -> TextRange {
        TextRange::new(self.anchor, self.head).normalized()
    }
}

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `char_idx`, or `text.len()` past the end
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Convert a UTF-16 code unit offset into a character offset.
///
/// An offset that falls inside a surrogate pair rounds up to the next
/// character; offsets past the end clamp to the character length.
pub fn utf16_to_char(text: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (chars, ch) in text.chars().enumerate() {
        if units >= utf16_idx {
            return chars;
        }
        units += ch.len_utf16();
    }
    char_len(text)
}

/// Convert a character offset into a UTF-16 code unit offset
pub fn char_to_utf16(text: &str, char_idx: usize) -> usize {
    text.chars().take(char_idx).map(char::len_utf16).sum()
}
