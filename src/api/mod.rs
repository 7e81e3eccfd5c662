//! Petition Editor WASM API
//!
//! JavaScript-facing surface of the crate. Core modules stay free of
//! `JsValue`; this layer parses names, converts UTF-16 offsets and
//! serializes results.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serde conversion, error mapping
//! - `document`: Stateless functions over a content string
//! - `editor`: `PetitionEditor` handle with selection and undo history

pub mod helpers;
pub mod document;
pub mod editor;

pub use document::{
    format_selection, get_document_stats, insert_section_template, parse_lines, render_document,
    render_document_html, serialize_lines,
};
pub use editor::PetitionEditor;
