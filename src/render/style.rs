//! Presentation attributes of a block
//!
//! Styling is a pure function of the block kind. Theme values (fonts,
//! colors) are not part of it; they come from `RenderOptions` at output time.

use super::BlockKind;
use crate::markup::Alignment;
use serde::{Deserialize, Serialize};

/// Relative text size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Normal,
    Medium,
    Large,
}

impl TextSize {
    /// Multiplier applied to the base font size
    pub fn scale(&self) -> f32 {
        match self {
            TextSize::Normal => 1.0,
            TextSize::Medium => 1.15,
            TextSize::Large => 1.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    pub align: Alignment,
    pub bold: bool,
    pub italic: bool,
    pub uppercase: bool,
    pub size: TextSize,
    /// Border under the text (section headings)
    pub border_bottom: bool,
    /// Horizontal rule above the text (signature lines)
    pub rule_above: bool,
    pub first_line_indent: bool,
    /// Secondary color (placeholder text)
    pub muted: bool,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            align: Alignment::Left,
            bold: false,
            italic: false,
            uppercase: false,
            size: TextSize::Normal,
            border_bottom: false,
            rule_above: false,
            first_line_indent: false,
            muted: false,
        }
    }
}

impl BlockStyle {
    fn aligned(align: Alignment) -> Self {
        Self { align, ..Self::default() }
    }

    pub fn for_kind(kind: &BlockKind) -> Self {
        match kind {
            BlockKind::Spacer => Self::default(),
            BlockKind::Caption => Self {
                bold: true,
                uppercase: true,
                size: TextSize::Large,
                ..Self::aligned(Alignment::Center)
            },
            BlockKind::ActionTitle => Self {
                bold: true,
                size: TextSize::Medium,
                ..Self::aligned(Alignment::Center)
            },
            BlockKind::SectionHeading => Self {
                bold: true,
                uppercase: true,
                size: TextSize::Medium,
                border_bottom: true,
                ..Self::aligned(Alignment::Center)
            },
            BlockKind::PartyQualification { .. } => Self::aligned(Alignment::Left),
            BlockKind::NumberedParagraph { .. } | BlockKind::LetteredItem { .. } => {
                Self::aligned(Alignment::Justify)
            }
            BlockKind::ClosingPhrase => Self {
                italic: true,
                ..Self::aligned(Alignment::Center)
            },
            BlockKind::PlaceDate => Self::aligned(Alignment::Right),
            BlockKind::Signature => Self {
                rule_above: true,
                ..Self::aligned(Alignment::Center)
            },
            BlockKind::Aligned { align } => Self::aligned(*align),
            BlockKind::Paragraph { indented } => Self {
                first_line_indent: *indented,
                ..Self::aligned(Alignment::Justify)
            },
            BlockKind::Placeholder => Self {
                italic: true,
                muted: true,
                ..Self::aligned(Alignment::Center)
            },
        }
    }
}
