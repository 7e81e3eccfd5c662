//! Alignment wrappers and tagged lines
//!
//! Plain text has no marker for alignment, so the editor stores it as an
//! inline `<div style="text-align: ...">...</div>` around the line. Inside
//! the crate a line is better seen as `{ text, align }`; this module converts
//! between the two forms so the wrapper only exists in the persisted string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Closing tag of an alignment wrapper
pub const DIV_CLOSE: &str = "</div>";

static DIV_WRAPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<div style="([^"]*)">(.*?)</div>"#).expect("valid wrapper regex"));

static WHOLE_LINE_WRAPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*<div style="([^"]*)">(.*)</div>\s*$"#).expect("valid line wrapper regex")
});

static TEXT_ALIGN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"text-align:\s*([a-z]+)").expect("valid text-align regex"));

/// Horizontal alignment of a block or line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// CSS `text-align` keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    /// Read the `text-align` value out of an inline style attribute.
    /// Only `center` and `right` are recognized; everything else is left.
    pub fn from_style(style: &str) -> Self {
        match TEXT_ALIGN.captures(style).and_then(|caps| caps.get(1)) {
            Some(value) if value.as_str() == "center" => Alignment::Center,
            Some(value) if value.as_str() == "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// Opening tag for `align`
pub fn open_tag(align: Alignment) -> String {
    format!("<div style=\"text-align: {}\">", align.as_css())
}

/// Wrap `text` in an alignment div
pub fn wrap_aligned(text: &str, align: Alignment) -> String {
    format!("{}{}{}", open_tag(align), text, DIV_CLOSE)
}

/// Strip wrappers layer by layer. The non-greedy pattern pairs an outer
/// opening tag with the first closing tag, so each pass removes one level of
/// nesting. The alignment returned is the first match of the last pass, i.e.
/// the innermost wrapper around the first wrapped text.
fn peel(line: &str) -> (Cow<'_, str>, Option<Alignment>) {
    let mut text = Cow::Borrowed(line);
    let mut align = None;
    loop {
        let Some(found) = DIV_WRAPPER
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|style| Alignment::from_style(style.as_str()))
        else {
            break;
        };
        align = Some(found);
        text = Cow::Owned(DIV_WRAPPER.replace_all(&text, "$2").into_owned());
    }
    (text, align)
}

/// Alignment of the innermost wrapper in `line`, if it has one
pub fn find_alignment(line: &str) -> Option<Alignment> {
    peel(line).1
}

/// Replace every wrapper in `line` with its inner text, nested ones included
pub fn unwrap_aligned(line: &str) -> Cow<'_, str> {
    peel(line).0
}

/// One buffer line with its alignment lifted out of the markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedLine {
    pub text: String,
    pub align: Option<Alignment>,
}

impl TaggedLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), align: None }
    }

    pub fn aligned(text: impl Into<String>, align: Alignment) -> Self {
        Self { text: text.into(), align: Some(align) }
    }

    fn parse(line: &str) -> Self {
        if !WHOLE_LINE_WRAPPER.is_match(line) {
            return Self::plain(line);
        }
        match peel(line.trim()) {
            (text, Some(align)) => Self::aligned(text, align),
            (_, None) => Self::plain(line),
        }
    }

    fn to_markup(&self) -> Cow<'_, str> {
        match self.align {
            Some(align) => Cow::Owned(wrap_aligned(&self.text, align)),
            None => Cow::Borrowed(&self.text),
        }
    }
}

/// Split persisted content into tagged lines
pub fn parse_tagged_lines(content: &str) -> Vec<TaggedLine> {
    content.split('\n').map(TaggedLine::parse).collect()
}

/// Serialize tagged lines back into the persisted string form
pub fn serialize_tagged_lines(lines: &[TaggedLine]) -> String {
    lines
        .iter()
        .map(TaggedLine::to_markup)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_from_style() {
        assert_eq!(Alignment::from_style("text-align: center"), Alignment::Center);
        assert_eq!(Alignment::from_style("text-align:right"), Alignment::Right);
        assert_eq!(Alignment::from_style("text-align: justify"), Alignment::Left);
        assert_eq!(Alignment::from_style("color: red"), Alignment::Left);
    }

    #[test]
    fn test_find_and_unwrap() {
        let line = r#"<div style="text-align: right">São Paulo</div>"#;
        assert_eq!(find_alignment(line), Some(Alignment::Right));
        assert_eq!(unwrap_aligned(line), "São Paulo");
        assert_eq!(find_alignment("plain"), None);
        assert!(matches!(unwrap_aligned("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_nested_wrappers() {
        let inner = wrap_aligned("Assinado digitalmente", Alignment::Center);
        let line = wrap_aligned(&inner, Alignment::Right);

        assert_eq!(unwrap_aligned(&line), "Assinado digitalmente");
        assert_eq!(find_alignment(&line), Some(Alignment::Center));

        let triple = wrap_aligned(&line, Alignment::Left);
        assert_eq!(unwrap_aligned(&triple), "Assinado digitalmente");
        assert_eq!(find_alignment(&triple), Some(Alignment::Center));
    }

    #[test]
    fn test_sibling_wrappers() {
        let line = format!(
            "{} e {}",
            wrap_aligned("um", Alignment::Right),
            wrap_aligned("dois", Alignment::Center)
        );
        assert_eq!(unwrap_aligned(&line), "um e dois");
        assert_eq!(find_alignment(&line), Some(Alignment::Right));
    }

    #[test]
    fn test_nested_tagged_line() {
        let line = wrap_aligned(&wrap_aligned("Brasília", Alignment::Center), Alignment::Right);
        assert_eq!(parse_tagged_lines(&line)[0], TaggedLine::aligned("Brasília", Alignment::Center));
    }

    #[test]
    fn test_tagged_lines() {
        let content = "DOS FATOS\n<div style=\"text-align: center\">Brasília, 2024</div>\n";
        let lines = parse_tagged_lines(content);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TaggedLine::plain("DOS FATOS"));
        assert_eq!(lines[1], TaggedLine::aligned("Brasília, 2024", Alignment::Center));
        assert_eq!(lines[2], TaggedLine::plain(""));
        assert_eq!(serialize_tagged_lines(&lines), content);
    }

    #[test]
    fn test_partial_wrapper_is_not_a_tagged_line() {
        let line = r#"Local: <div style="text-align: right">x</div> fim"#;
        assert_eq!(parse_tagged_lines(line)[0].align, None);
    }
}
