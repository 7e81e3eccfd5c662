//! Text layer
//!
//! Plain string storage with no knowledge of petitions. The content string
//! is the source of truth; everything the renderer shows is derived from it.
//!
//! ## Modules
//!
//! - `buffer`: Content storage, selection and undo/redo
//! - `cursor`: Character ranges and UTF-16 offset conversion
//! - `stats`: Line/word/character counters

pub mod buffer;
pub mod cursor;
pub mod stats;

pub use buffer::{EditResult, PetitionBuffer, TextEdit, DEFAULT_HISTORY};
pub use cursor::{char_len, char_to_byte, char_to_utf16, utf16_to_char, Selection, TextRange};
pub use stats::{document_stats, DocumentStats};
