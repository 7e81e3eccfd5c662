//! Pseudo-markup vocabulary and toolbar operations
//!
//! The editor and the renderer agree on this marker set. Changing a marker
//! here changes both sides.
//!
//! ## Modules
//!
//! - `formatting`: Apply a toolbar operation to a selection
//! - `aligned`: `<div style="text-align">` wrappers and tagged lines

pub mod aligned;
pub mod formatting;

pub use aligned::{
    find_alignment, parse_tagged_lines, serialize_tagged_lines, unwrap_aligned, wrap_aligned,
    Alignment, TaggedLine,
};
pub use formatting::apply_formatting;

use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BOLD: &str = "**";
pub const ITALIC: &str = "*";
pub const UNDERLINE: &str = "__";
pub const H1: &str = "# ";
pub const H2: &str = "## ";
pub const H3: &str = "### ";
pub const BULLET: &str = "- ";
pub const QUOTE: &str = "> ";

/// How an operation marks up the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Marker pair around the selected text
    Wrap(&'static str),
    /// Prefix on every selected line
    Prefix(&'static str),
    /// `1. `, `2. `, ... on every selected line
    Numbered,
    /// Alignment div around every selected line
    Align(Alignment),
}

/// Toolbar formatting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatOperation {
    Bold,
    Italic,
    Underline,
    Center,
    Right,
    H1,
    H2,
    H3,
    OrderedList,
    UnorderedList,
    Quote,
}

impl FormatOperation {
    pub const ALL: [FormatOperation; 11] = [
        FormatOperation::Bold,
        FormatOperation::Italic,
        FormatOperation::Underline,
        FormatOperation::Center,
        FormatOperation::Right,
        FormatOperation::H1,
        FormatOperation::H2,
        FormatOperation::H3,
        FormatOperation::OrderedList,
        FormatOperation::UnorderedList,
        FormatOperation::Quote,
    ];

    /// Toolbar name, as sent by the hosting screen
    pub fn name(&self) -> &'static str {
        match self {
            FormatOperation::Bold => "bold",
            FormatOperation::Italic => "italic",
            FormatOperation::Underline => "underline",
            FormatOperation::Center => "center",
            FormatOperation::Right => "right",
            FormatOperation::H1 => "h1",
            FormatOperation::H2 => "h2",
            FormatOperation::H3 => "h3",
            FormatOperation::OrderedList => "orderedList",
            FormatOperation::UnorderedList => "unorderedList",
            FormatOperation::Quote => "quote",
        }
    }

    pub fn markup(&self) -> Markup {
        match self {
            FormatOperation::Bold => Markup::Wrap(BOLD),
            FormatOperation::Italic => Markup::Wrap(ITALIC),
            FormatOperation::Underline => Markup::Wrap(UNDERLINE),
            FormatOperation::Center => Markup::Align(Alignment::Center),
            FormatOperation::Right => Markup::Align(Alignment::Right),
            FormatOperation::H1 => Markup::Prefix(H1),
            FormatOperation::H2 => Markup::Prefix(H2),
            FormatOperation::H3 => Markup::Prefix(H3),
            FormatOperation::OrderedList => Markup::Numbered,
            FormatOperation::UnorderedList => Markup::Prefix(BULLET),
            FormatOperation::Quote => Markup::Prefix(QUOTE),
        }
    }

    /// Whether the operation works line by line rather than on a span
    pub fn is_line_oriented(&self) -> bool {
        !matches!(self.markup(), Markup::Wrap(_))
    }
}

impl FromStr for FormatOperation {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| EditorError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for FormatOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
