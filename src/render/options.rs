//! Render-time appearance settings
//!
//! Passed explicitly by the host instead of being read from a global theme.
//! Every field has a default so JavaScript may send a partial object.

use serde::{Deserialize, Serialize};

/// Colors used by the HTML output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub text: String,
    pub heading: String,
    /// Placeholder and secondary text
    pub muted: String,
    /// Heading borders and signature rules
    pub rule: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: "#1f2937".to_string(),
            heading: "#111827".to_string(),
            muted: "#6b7280".to_string(),
            rule: "#374151".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub font_family: String,
    /// Base font size in points
    pub font_size: f32,
    pub line_height: f32,
    /// First-line indent of long paragraphs, in centimeters
    pub paragraph_indent_cm: f32,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: "'Times New Roman', Times, serif".to_string(),
            font_size: 12.0,
            line_height: 1.5,
            paragraph_indent_cm: 2.5,
            palette: Palette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_use_defaults() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"fontSize": 14, "palette": {"text": "black"}}"#).unwrap();
        assert_eq!(options.font_size, 14.0);
        assert_eq!(options.palette.text, "black");
        assert_eq!(options.palette.rule, Palette::default().rule);
        assert_eq!(options.font_family, RenderOptions::default().font_family);
    }
}
