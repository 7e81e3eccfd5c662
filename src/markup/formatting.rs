//! Toolbar formatting over a plain-text selection
//!
//! Every operation replaces the selected span `[start, end)` with computed
//! markup and reports where the cursor should land. Offsets are characters.

use super::aligned::{open_tag, DIV_CLOSE};
use super::{FormatOperation, Markup};
use crate::text::{char_len, char_to_byte, EditResult, TextRange};

/// Apply `operation` to the selection `[selection_start, selection_end)`.
///
/// With an empty selection the bare markers are inserted and the cursor is
/// placed where the user would continue typing. With a selection the cursor
/// lands after the inserted markup. Any range is accepted: reversed ranges
/// are reordered and offsets past the end are clamped.
pub fn apply_formatting(
    content: &str,
    selection_start: usize,
    selection_end: usize,
    operation: FormatOperation,
) -> EditResult {
    let range = TextRange::new(selection_start, selection_end).clamped(char_len(content));
    let from = char_to_byte(content, range.start);
    let to = char_to_byte(content, range.end);

    let (replacement, cursor_offset) = format_selection(&content[from..to], operation.markup());
    log::debug!(
        "apply_formatting: {} on {}..{} -> {} chars",
        operation,
        range.start,
        range.end,
        char_len(&replacement)
    );

    let mut result = String::with_capacity(content.len() + replacement.len());
    result.push_str(&content[..from]);
    result.push_str(&replacement);
    result.push_str(&content[to..]);

    EditResult::new(result, range.start + cursor_offset)
}

/// Markup for `selected` and the cursor offset relative to its start
fn format_selection(selected: &str, markup: Markup) -> (String, usize) {
    if selected.is_empty() {
        return empty_markup(markup);
    }

    let formatted = match markup {
        Markup::Wrap(marker) => format!("{marker}{selected}{marker}"),
        Markup::Prefix(prefix) => map_lines(selected, |_, line| format!("{prefix}{line}")),
        Markup::Numbered => map_lines(selected, |i, line| format!("{}. {line}", i + 1)),
        Markup::Align(align) => {
            let open = open_tag(align);
            map_lines(selected, |_, line| format!("{open}{line}{DIV_CLOSE}"))
        }
    };
    let cursor = char_len(&formatted);
    (formatted, cursor)
}

fn empty_markup(markup: Markup) -> (String, usize) {
    match markup {
        Markup::Wrap(marker) => (marker.repeat(2), char_len(marker)),
        Markup::Prefix(prefix) => (prefix.to_string(), char_len(prefix)),
        Markup::Numbered => ("1. ".to_string(), 3),
        Markup::Align(align) => {
            let open = open_tag(align);
            let cursor = char_len(&open);
            (format!("{open}{DIV_CLOSE}"), cursor)
        }
    }
}

fn map_lines(selected: &str, f: impl Fn(usize, &str) -> String) -> String {
    selected
        .split('\n')
        .enumerate()
        .map(|(i, line)| f(i, line))
        .collect::<Vec<_>>()
        .join("\n")
}
