//! Read-only buffer metrics shown next to the editor

use serde::{Deserialize, Serialize};

/// Line, word and character counts for a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
}

impl DocumentStats {
    pub fn of(content: &str) -> Self {
        Self {
            // An empty buffer still has one (empty) line
            lines: content.split('\n').count(),
            words: content.split_whitespace().count(),
            // UTF-16 units, the same count the host's `value.length` reports
            characters: content.encode_utf16().count(),
        }
    }
}

/// Compute the statistics of `content`
pub fn document_stats(content: &str) -> DocumentStats {
    DocumentStats::of(content)
}
