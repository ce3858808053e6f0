//! Note layout and markdown line styling.
//!
//! This module handles:
//! - Classifying logical lines (`# `, `## `, `- `, plain text)
//! - Word-wrapping each line against a width budget
//! - Placing wrapped lines vertically inside a pane

mod types;
mod wrap;

pub use types::{
    BULLET_GLYPH, CellMeasure, LineType, PlacedLine, RenderedLine, TextMeasure, TextSize,
};
pub use wrap::wrap_line;

/// A note's content laid out as display lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<RenderedLine>,
}

impl Document {
    /// Create an empty document.
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lay out `content` for a pane `width` units wide.
    ///
    /// Each newline-delimited line is classified first, then its text (with
    /// the markdown prefix removed) is wrapped at the size of its style.
    /// Bullet text wraps within the width left after the bullet indent.
    /// Empty content produces no lines.
    pub fn layout(content: &str, width: u16, measure: &impl TextMeasure) -> Self {
        if content.is_empty() {
            return Self::empty();
        }
        let mut lines = Vec::new();
        for logical in content.split('\n') {
            let (line_type, body) = LineType::classify(logical);
            let budget = if matches!(line_type, LineType::Bullet) {
                width.saturating_sub(measure.bullet_indent())
            } else {
                width
            };
            let pieces = wrap_line(body, budget, line_type.text_size(), measure);
            for (idx, piece) in pieces.into_iter().enumerate() {
                let line = if idx == 0 {
                    RenderedLine::new(piece.to_string(), line_type)
                } else {
                    RenderedLine::continued(piece.to_string(), line_type)
                };
                lines.push(line);
            }
        }
        Self { lines }
    }

    /// All display lines.
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Get the total number of display lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Place lines starting at `offset` into a pane `height` units tall.
    ///
    /// Placement stops once the running y position reaches the pane height.
    pub fn visible_lines(
        &self,
        offset: usize,
        height: u16,
        measure: &impl TextMeasure,
    ) -> Vec<PlacedLine<'_>> {
        let mut placed = Vec::new();
        let mut y = 0u16;
        for line in self.lines.iter().skip(offset) {
            if y >= height {
                break;
            }
            placed.push(PlacedLine { line, y });
            y = y.saturating_add(measure.line_height(line.line_type().text_size()));
        }
        placed
    }

    /// First line offset that keeps the last line inside a pane `height`
    /// units tall.
    pub fn tail_offset(&self, height: u16, measure: &impl TextMeasure) -> usize {
        let mut used = 0u16;
        let mut offset = self.lines.len();
        for line in self.lines.iter().rev() {
            let next = used.saturating_add(measure.line_height(line.line_type().text_size()));
            if next > height {
                break;
            }
            used = next;
            offset -= 1;
        }
        offset
    }

    /// Position just after the last character: (line index, x offset).
    ///
    /// Returns `None` for an empty document.
    pub fn end_position(&self, measure: &impl TextMeasure) -> Option<(usize, u16)> {
        let idx = self.lines.len().checked_sub(1)?;
        let line = &self.lines[idx];
        let x = line
            .indent(measure)
            .saturating_add(measure.width(line.content(), line.line_type().text_size()));
        Some((idx, x))
    }
}
