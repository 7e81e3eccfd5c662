//! Petition Editor WASM Module
//!
//! Authoring core for legal petitions: a plain-text pseudo-markup editor and
//! a renderer that classifies each line of the same text into a formatted
//! document block. The content string is the only state shared by the two.

pub mod error;
pub mod text;
pub mod markup;
pub mod templates;
pub mod render;
pub mod api;

// Re-export commonly used types
pub use error::EditorError;
pub use markup::{apply_formatting, Alignment, FormatOperation, TaggedLine};
pub use render::{render, render_html, Block, BlockKind, BlockStyle, RenderOptions};
pub use templates::{insert_template, TemplateKind};
pub use text::{document_stats, DocumentStats, EditResult, PetitionBuffer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("logger already initialized");
    }

    log::info!("Petition Editor WASM module initialized");
}
