//! Theming and color definitions.
//!
//! Uses ANSI colors so the terminal's palette decides the exact shades.

use ratatui::style::{Color, Modifier, Style};

use crate::document::LineType;

/// Get the style for a given line type.
pub fn style_for_line_type(line_type: LineType) -> Style {
    let theme = Theme::default();
    match line_type {
        LineType::Heading(1) => theme.h1,
        LineType::Heading(_) => theme.h2,
        LineType::Bullet | LineType::Paragraph | LineType::Empty => Style::default(),
    }
}

/// Colors for editor content and window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Level 1 heading
    pub h1: Style,
    /// Level 2 heading
    pub h2: Style,
    /// Bullet glyph
    pub bullet: Style,
    /// Header bar
    pub header: Style,
    /// Unsaved-changes marker
    pub dirty_marker: Style,
    /// Sidebar section label
    pub label: Style,
    /// "+ New Note" button
    pub button: Style,
    /// Selected list item
    pub selected: Style,
    /// Hovered list item or button
    pub hovered: Style,
    /// Editor title and separator
    pub separator: Style,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar foreground
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            bullet: Style::default().fg(Color::Magenta),
            header: Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(236))
                .add_modifier(Modifier::BOLD),
            dirty_marker: Style::default().fg(Color::Yellow),
            label: Style::default()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::BOLD),
            button: Style::default().fg(Color::Green),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            hovered: Style::default().bg(Color::Indexed(238)),
            separator: Style::default().fg(Color::Indexed(240)),
            status_bg: Color::Indexed(236),
            status_fg: Color::Indexed(252),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_styles_are_bold() {
        for level in 1..=2 {
            let style = style_for_line_type(LineType::Heading(level));
            assert!(style.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_h1_is_underlined_and_h2_is_not() {
        let h1 = style_for_line_type(LineType::Heading(1));
        let h2 = style_for_line_type(LineType::Heading(2));
        assert!(h1.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!h2.add_modifier.contains(Modifier::UNDERLINED));
        assert_ne!(h1.fg, h2.fg);
    }

    #[test]
    fn test_plain_lines_use_default_style() {
        assert_eq!(style_for_line_type(LineType::Paragraph), Style::default());
        assert_eq!(style_for_line_type(LineType::Bullet), Style::default());
    }

    #[test]
    fn test_bullet_glyph_shares_h1_accent() {
        let theme = Theme::default();
        assert_eq!(theme.bullet.fg, theme.h1.fg);
    }
}
