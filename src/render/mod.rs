//! Petition renderer
//!
//! Turns the content string into a sequence of styled blocks, one per line.
//! The renderer keeps no state between calls: the same string always yields
//! the same blocks.
//!
//! ## Modules
//!
//! - `rules`: Ordered line classification cascade
//! - `style`: Presentation attributes derived from a block kind
//! - `options`: Theme settings supplied by the host
//! - `html`: HTML fragment output for the preview pane

pub mod html;
pub mod options;
pub mod rules;
pub mod style;

pub use html::{render_html, render_html_blocks};
pub use options::{Palette, RenderOptions};
pub use rules::{classify_line, matching_rule, LineContext, Rule, RULES};
pub use style::{BlockStyle, TextSize};

use crate::markup::{unwrap_aligned, Alignment, BOLD};
use serde::{Deserialize, Serialize};

/// Text shown when the document has no content
pub const PLACEHOLDER_TEXT: &str = "Nenhum conteúdo disponível";

/// What a line was classified as, with any extracted parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockKind {
    Spacer,
    Caption,
    ActionTitle,
    SectionHeading,
    PartyQualification { label: String, value: String },
    NumberedParagraph { number: String, body: String },
    LetteredItem { letter: String, body: String },
    ClosingPhrase,
    PlaceDate,
    Signature,
    Aligned { align: Alignment },
    Paragraph { indented: bool },
    Placeholder,
}

/// One rendered unit of output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Source line, `None` for the placeholder
    pub line_index: Option<usize>,
    #[serde(flatten)]
    pub kind: BlockKind,
    /// Display text with markup removed
    pub text: String,
    pub style: BlockStyle,
}

impl Block {
    pub fn new(line_index: Option<usize>, kind: BlockKind, text: String) -> Self {
        let style = BlockStyle::for_kind(&kind);
        Self { line_index, kind, text, style }
    }

    pub fn placeholder() -> Self {
        Self::new(None, BlockKind::Placeholder, PLACEHOLDER_TEXT.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == BlockKind::Placeholder
    }
}

/// Remove bold markers and alignment wrappers from text meant for display
pub fn clean_display(text: &str) -> String {
    unwrap_aligned(text).replace(BOLD, "")
}

/// Render `content` into blocks.
///
/// Always returns at least one block: blank content yields the placeholder.
pub fn render(content: &str) -> Vec<Block> {
    if content.trim().is_empty() {
        return vec![Block::placeholder()];
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let total = lines.len();
    log::debug!("render: {} lines", total);

    lines
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let ctx = LineContext::new(index, total, raw);
            let kind = classify_line(&ctx);
            let text = match kind {
                BlockKind::Spacer => String::new(),
                _ => clean_display(ctx.trimmed),
            };
            Block::new(Some(index), kind, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_content_yield_placeholder() {
        for content in ["", "   ", "\n\n  \n"] {
            let blocks = render(content);
            assert_eq!(blocks.len(), 1);
            assert!(blocks[0].is_placeholder());
            assert_eq!(blocks[0].text, PLACEHOLDER_TEXT);
        }
    }

    #[test]
    fn test_one_block_per_line() {
        let blocks = render("a\n\nb");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].kind, BlockKind::Spacer);
        assert_eq!(blocks[1].text, "");
        assert_eq!(blocks[2].line_index, Some(2));
    }

    #[test]
    fn test_bold_markers_stripped() {
        let blocks = render("x\nx\nx\nx\nx\nx\nx\nx\nx\nx\n**DOS FATOS**\nx\nx\nx\nx\nx\nx");
        let heading = &blocks[10];
        assert_eq!(heading.kind, BlockKind::SectionHeading);
        assert_eq!(heading.text, "DOS FATOS");
    }

    #[test]
    fn test_wrapper_never_leaks_into_text() {
        // Near the top the action title rule fires first, but the text is still clean
        let blocks = render(r#"<div style="text-align: center">Ação de cobrança</div>"#);
        assert_eq!(blocks[0].kind, BlockKind::ActionTitle);
        assert_eq!(blocks[0].text, "Ação de cobrança");
    }

    #[test]
    fn test_serialized_shape() {
        let block = Block::new(
            Some(3),
            BlockKind::NumberedParagraph { number: "1.".to_string(), body: "Texto".to_string() },
            "1. Texto".to_string(),
        );
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "numberedParagraph");
        assert_eq!(json["number"], "1.");
        assert_eq!(json["lineIndex"], 3);
        assert_eq!(json["style"]["align"], "justify");
    }
}
