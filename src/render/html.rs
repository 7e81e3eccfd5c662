//! HTML output for the preview pane
//!
//! Every block becomes one element with inline CSS, so the fragment can be
//! dropped into the page without a stylesheet.

use super::{render, Block, BlockKind, BlockStyle, RenderOptions, TextSize};
use crate::markup::Alignment;

/// Render `content` straight to an HTML fragment
pub fn render_html(content: &str, options: &RenderOptions) -> String {
    render_html_blocks(&render(content), options)
}

/// Serialize already rendered blocks
pub fn render_html_blocks(blocks: &[Block], options: &RenderOptions) -> String {
    let mut html = format!(
        "<article class=\"petition\" style=\"font-family: {}; font-size: {}pt; line-height: {}; color: {}\">\n",
        escape_html(&options.font_family),
        options.font_size,
        options.line_height,
        escape_html(&options.palette.text),
    );
    for block in blocks {
        html.push_str(&block_html(block, options));
        html.push('\n');
    }
    html.push_str("</article>");
    html
}

fn block_html(block: &Block, options: &RenderOptions) -> String {
    let class = css_class(&block.kind);
    let style = inline_style(&block.style, options);

    match &block.kind {
        BlockKind::Spacer => format!("<div class=\"block {class}\" style=\"height: 1em\"></div>"),
        BlockKind::PartyQualification { label, value } => format!(
            "<p class=\"block {class}\" style=\"{style}\"><strong>{}</strong> {}</p>",
            escape_html(label),
            escape_html(value),
        ),
        BlockKind::NumberedParagraph { number, body } => gutter_html(class, &style, number, body, "0"),
        BlockKind::LetteredItem { letter, body } => gutter_html(class, &style, letter, body, "2em"),
        BlockKind::Signature => format!(
            "<div class=\"block {class}\" style=\"{style}; margin-top: 2em\">\
             <hr style=\"border: 0; border-top: 1px solid {}; width: 50%; margin: 0 auto 0.5em\">{}</div>",
            escape_html(&options.palette.rule),
            escape_html(&block.text),
        ),
        _ => format!(
            "<p class=\"block {class}\" style=\"{style}\">{}</p>",
            escape_html(&block.text)
        ),
    }
}

/// Token in a fixed-width bold column, body justified beside it
fn gutter_html(class: &str, style: &str, token: &str, body: &str, indent: &str) -> String {
    format!(
        "<div class=\"block {class}\" style=\"{style}; display: flex; margin-left: {indent}\">\
         <span style=\"font-weight: bold; min-width: 2.5em; flex-shrink: 0\">{}</span>\
         <span style=\"flex: 1; text-align: justify\">{}</span></div>",
        escape_html(token),
        escape_html(body),
    )
}

fn css_class(kind: &BlockKind) -> &'static str {
    match kind {
        BlockKind::Spacer => "spacer",
        BlockKind::Caption => "caption",
        BlockKind::ActionTitle => "action-title",
        BlockKind::SectionHeading => "section-heading",
        BlockKind::PartyQualification { .. } => "party",
        BlockKind::NumberedParagraph { .. } => "numbered",
        BlockKind::LetteredItem { .. } => "lettered",
        BlockKind::ClosingPhrase => "closing",
        BlockKind::PlaceDate => "place-date",
        BlockKind::Signature => "signature",
        BlockKind::Aligned { .. } => "aligned",
        BlockKind::Paragraph { .. } => "paragraph",
        BlockKind::Placeholder => "placeholder",
    }
}

fn inline_style(style: &BlockStyle, options: &RenderOptions) -> String {
    let mut rules = vec![format!("text-align: {}", style.align.as_css())];

    if style.bold {
        rules.push("font-weight: bold".to_string());
        rules.push(format!("color: {}", escape_html(&options.palette.heading)));
    }
    if style.italic {
        rules.push("font-style: italic".to_string());
    }
    if style.uppercase {
        rules.push("text-transform: uppercase".to_string());
    }
    if style.size != TextSize::Normal {
        rules.push(format!("font-size: {:.1}pt", options.font_size * style.size.scale()));
    }
    if style.border_bottom {
        rules.push(format!(
            "border-bottom: 1px solid {}; padding-bottom: 0.25em",
            escape_html(&options.palette.rule)
        ));
    }
    if style.first_line_indent {
        rules.push(format!("text-indent: {}cm", options.paragraph_indent_cm));
    }
    if style.muted {
        rules.push(format!("color: {}", escape_html(&options.palette.muted)));
    }
    if style.align == Alignment::Center && (style.bold || style.uppercase) {
        rules.push("margin: 1em 0".to_string());
    }

    rules.join("; ")
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
