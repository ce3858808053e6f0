//! Core document types.

use unicode_width::UnicodeWidthChar;

/// Glyph drawn in front of bullet items.
pub const BULLET_GLYPH: &str = "•";

/// Relative text size for a line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    Base,
    Heading1,
    Heading2,
}

/// Measures rendered text.
///
/// Widths are additive per character, so appending characters never makes
/// a string narrower.
pub trait TextMeasure {
    /// Horizontal advance of a single character at the given size.
    fn char_width(&self, ch: char, size: TextSize) -> u16;

    /// Rendered width of `text` at the given size.
    fn width(&self, text: &str, size: TextSize) -> u16 {
        text.chars()
            .fold(0u16, |acc, ch| acc.saturating_add(self.char_width(ch, size)))
    }

    /// Vertical advance of one line at the given size.
    fn line_height(&self, _size: TextSize) -> u16 {
        1
    }

    /// Horizontal indent applied to bullet text (after the glyph).
    fn bullet_indent(&self) -> u16 {
        2
    }
}

/// Terminal cell metrics: every size renders one cell per column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn char_width(&self, ch: char, _size: TextSize) -> u16 {
        // Zero-width and control characters advance nothing
        u16::try_from(ch.width().unwrap_or(0)).unwrap_or(u16::MAX)
    }
}

/// Style classification of a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// `# ` (level 1) or `## ` (level 2)
    Heading(u8),
    /// `- `
    Bullet,
    Paragraph,
    Empty,
}

impl LineType {
    /// Classify a logical line, returning its type and the text after the
    /// markdown prefix.
    pub fn classify(line: &str) -> (Self, &str) {
        if let Some(rest) = line.strip_prefix("# ") {
            (Self::Heading(1), rest)
        } else if let Some(rest) = line.strip_prefix("## ") {
            (Self::Heading(2), rest)
        } else if let Some(rest) = line.strip_prefix("- ") {
            (Self::Bullet, rest)
        } else if line.is_empty() {
            (Self::Empty, line)
        } else {
            (Self::Paragraph, line)
        }
    }

    /// Text size used to render and measure this line type.
    pub const fn text_size(self) -> TextSize {
        match self {
            Self::Heading(1) => TextSize::Heading1,
            Self::Heading(_) => TextSize::Heading2,
            Self::Bullet | Self::Paragraph | Self::Empty => TextSize::Base,
        }
    }
}

/// A single wrapped, styled line ready for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    content: String,
    line_type: LineType,
    continuation: bool,
}

impl RenderedLine {
    /// Create a new rendered line.
    pub const fn new(content: String, line_type: LineType) -> Self {
        Self {
            content,
            line_type,
            continuation: false,
        }
    }

    /// Create a line that continues a wrapped logical line.
    pub const fn continued(content: String, line_type: LineType) -> Self {
        Self {
            content,
            line_type,
            continuation: true,
        }
    }

    /// Text to draw (markdown prefix already stripped).
    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn line_type(&self) -> LineType {
        self.line_type
    }

    /// True when this line is the second or later piece of a wrapped line.
    pub const fn is_continuation(&self) -> bool {
        self.continuation
    }

    /// Whether the bullet glyph is drawn in front of this line.
    pub const fn shows_bullet(&self) -> bool {
        matches!(self.line_type, LineType::Bullet) && !self.continuation
    }

    /// Horizontal offset of the text from the pane's left edge.
    pub fn indent(&self, measure: &impl TextMeasure) -> u16 {
        if matches!(self.line_type, LineType::Bullet) {
            measure.bullet_indent()
        } else {
            0
        }
    }
}

/// A line placed at a vertical offset inside the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub line: &'a RenderedLine,
    pub y: u16,
}
