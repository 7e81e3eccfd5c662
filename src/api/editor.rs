//! Stateful editor handle
//!
//! `PetitionEditor` keeps the buffer, selection and undo history on the WASM
//! side so the screen only forwards toolbar clicks and selection changes.
//! Edits are ignored while the editor is detached from its input surface.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, editor_error, serialize};
use crate::markup::{apply_formatting, FormatOperation};
use crate::render::{render, render_html, RenderOptions};
use crate::templates::{insert_template, TemplateKind};
use crate::text::{char_to_utf16, document_stats, utf16_to_char, PetitionBuffer};
use crate::{wasm_info, wasm_warn};

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct PetitionEditor {
    buffer: PetitionBuffer,
    focused: bool,
}

#[wasm_bindgen]
impl PetitionEditor {
    /// Create an editor, optionally holding previously saved content
    #[wasm_bindgen(constructor)]
    pub fn new(content: Option<String>) -> PetitionEditor {
        PetitionEditor {
            buffer: PetitionBuffer::from_content(content.unwrap_or_default()),
            focused: true,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn content(&self) -> String {
        self.buffer.content().to_string()
    }

    /// Replace the content (e.g. after loading); clears history
    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&mut self, content: &str) {
        self.buffer.set_content(content);
    }

    /// Update the selection from the textarea (UTF-16 offsets)
    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let content = self.buffer.content();
        let anchor = utf16_to_char(content, start);
        let head = utf16_to_char(content, end);
        self.buffer.set_selection(anchor, head);
    }

    /// Cursor position in UTF-16 code units
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> usize {
        char_to_utf16(self.buffer.content(), self.buffer.cursor())
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    #[wasm_bindgen(getter, js_name = isFocused)]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Apply a toolbar operation by name; returns the new cursor
    #[wasm_bindgen(js_name = applyFormatting)]
    pub fn apply_formatting_js(&mut self, operation: &str) -> Result<usize, JsValue> {
        let operation: FormatOperation = operation.parse().map_err(editor_error)?;
        if !self.focused {
            wasm_warn!("applyFormatting ignored: editor is not focused");
        }
        self.apply_operation(operation);
        Ok(self.cursor())
    }

    /// Insert a template by name; returns the new cursor
    #[wasm_bindgen(js_name = insertTemplate)]
    pub fn insert_template_js(&mut self, kind: &str) -> Result<usize, JsValue> {
        let kind: TemplateKind = kind.parse().map_err(editor_error)?;
        wasm_info!("insertTemplate: {}", kind);
        self.apply_template(kind);
        Ok(self.cursor())
    }

    pub fn undo(&mut self) -> bool {
        self.buffer.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.buffer.redo()
    }

    #[wasm_bindgen(getter, js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.buffer.can_undo()
    }

    #[wasm_bindgen(getter, js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.buffer.can_redo()
    }

    /// Blocks for the live preview
    #[wasm_bindgen(js_name = render)]
    pub fn render_js(&self) -> Result<JsValue, JsValue> {
        serialize(&render(self.buffer.content()), "render blocks")
    }

    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html_js(&self, options: JsValue) -> Result<String, JsValue> {
        let options: RenderOptions =
            deserialize_or_default(options, "render options").map_err(editor_error)?;
        Ok(render_html(self.buffer.content(), &options))
    }

    #[wasm_bindgen(js_name = stats)]
    pub fn stats_js(&self) -> Result<JsValue, JsValue> {
        serialize(&document_stats(self.buffer.content()), "stats")
    }
}

impl PetitionEditor {
    pub fn buffer(&self) -> &PetitionBuffer {
        &self.buffer
    }

    /// Apply `operation` to the current selection; no-op while unfocused
    pub fn apply_operation(&mut self, operation: FormatOperation) {
        if !self.focused {
            return;
        }
        let range = self.buffer.selected_range();
        let result = apply_formatting(self.buffer.content(), range.start, range.end, operation);
        self.buffer.apply(result);
    }

    /// Insert `kind` at the cursor; no-op while unfocused
    pub fn apply_template(&mut self, kind: TemplateKind) {
        if !self.focused {
            return;
        }
        let result = insert_template(self.buffer.content(), self.buffer.cursor(), kind);
        self.buffer.apply(result);
    }
}
