//! Stateless document functions
//!
//! Each call takes the content string from the hosting screen and returns a
//! new value; nothing is kept between calls. Offsets are UTF-16 code units on
//! this side of the boundary.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, editor_error, serialize, to_js_result};
use crate::markup::{self, FormatOperation, TaggedLine};
use crate::render::{self, RenderOptions};
use crate::templates::{self, TemplateKind};
use crate::text::{document_stats, utf16_to_char};
use crate::{wasm_error, wasm_log};

/// Apply a toolbar operation to the selection and return `{ content, cursor }`
#[wasm_bindgen(js_name = applyFormatting)]
pub fn format_selection(
    content: &str,
    selection_start: usize,
    selection_end: usize,
    operation: &str,
) -> Result<JsValue, JsValue> {
    wasm_log!("applyFormatting: {} {}..{}", operation, selection_start, selection_end);

    let operation: FormatOperation = operation.parse().map_err(editor_error)?;
    let start = utf16_to_char(content, selection_start);
    let end = utf16_to_char(content, selection_end);
    let result = markup::apply_formatting(content, start, end, operation);

    serialize(&to_js_result(result), "applyFormatting result")
}

/// Insert a section template at the cursor and return `{ content, cursor }`
#[wasm_bindgen(js_name = insertTemplate)]
pub fn insert_section_template(content: &str, cursor: usize, kind: &str) -> Result<JsValue, JsValue> {
    wasm_log!("insertTemplate: {} at {}", kind, cursor);

    let kind: TemplateKind = kind.parse().map_err(editor_error)?;
    let result = templates::insert_template(content, utf16_to_char(content, cursor), kind);

    serialize(&to_js_result(result), "insertTemplate result")
}

/// Classify the content into blocks
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document(content: &str) -> Result<JsValue, JsValue> {
    serialize(&render::render(content), "renderDocument blocks")
}

/// Render the content to an HTML fragment
#[wasm_bindgen(js_name = renderDocumentHtml)]
pub fn render_document_html(content: &str, options: JsValue) -> Result<String, JsValue> {
    let options: RenderOptions =
        deserialize_or_default(options, "render options").map_err(editor_error)?;
    Ok(render::render_html(content, &options))
}

/// Line, word and character counts
#[wasm_bindgen(js_name = documentStats)]
pub fn get_document_stats(content: &str) -> Result<JsValue, JsValue> {
    serialize(&document_stats(content), "documentStats")
}

/// Split content into `{ text, align }` records
#[wasm_bindgen(js_name = parseTaggedLines)]
pub fn parse_lines(content: &str) -> Result<JsValue, JsValue> {
    serialize(&markup::parse_tagged_lines(content), "parseTaggedLines")
}

/// Join `{ text, align }` records back into content
#[wasm_bindgen(js_name = serializeTaggedLines)]
pub fn serialize_lines(lines: JsValue) -> Result<String, JsValue> {
    let lines: Vec<TaggedLine> = serde_wasm_bindgen::from_value(lines).map_err(|e| {
        wasm_error!("serializeTaggedLines: {}", e);
        JsValue::from_str(&format!("Invalid tagged lines: {}", e))
    })?;
    Ok(markup::serialize_tagged_lines(&lines))
}
