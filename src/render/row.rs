//! Row rendering strategies
//!
//! Plain rows and icon-decorated rows share the same dropdown; the strategy
//! is picked from the options once, at construction.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::controller::DropdownOptions;

/// Turns one candidate into one rendered row
pub trait RowRenderer {
    /// Render `candidate` into a row at most `width` columns wide
    fn render(&self, candidate: &str, width: u16) -> Line<'static>;
}

/// Candidate text only
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRow;

impl RowRenderer for PlainRow {
    fn render(&self, candidate: &str, width: u16) -> Line<'static> {
        Line::from(truncate(candidate, width as usize))
    }
}

/// Candidate text with optional leading and trailing glyphs
#[derive(Debug, Clone, Default)]
pub struct IconRow {
    pub left: Option<String>,
    pub right: Option<String>,
}

impl RowRenderer for IconRow {
    fn render(&self, candidate: &str, width: u16) -> Line<'static> {
        let width = width as usize;
        let left = self.left.as_ref().map(|icon| format!("{} ", icon));
        let right = self.right.as_ref().map(|icon| format!(" {}", icon));

        let left_width = left.as_deref().map_or(0, UnicodeWidthStr::width);
        let right_width = right.as_deref().map_or(0, UnicodeWidthStr::width);
        let text_room = width.saturating_sub(left_width + right_width);
        let text = truncate(candidate, text_room);

        let mut spans = Vec::with_capacity(3);
        if let Some(left) = left {
            spans.push(Span::raw(left));
        }
        if let Some(right) = right {
            // Right icon hugs the right edge of the row
            let padding = text_room.saturating_sub(text.width());
            spans.push(Span::raw(format!("{}{}", text, " ".repeat(padding))));
            spans.push(Span::raw(right));
        } else {
            spans.push(Span::raw(text));
        }
        Line::from(spans)
    }
}

/// Pick the row strategy for the given options
pub fn row_renderer_for(options: &DropdownOptions) -> Box<dyn RowRenderer> {
    if options.left_icon.is_none() && options.right_icon.is_none() {
        Box::new(PlainRow)
    } else {
        Box::new(IconRow {
            left: options.left_icon.clone(),
            right: options.right_icon.clone(),
        })
    }
}

/// Cut `text` to at most `max_width` display columns
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod row_tests;
