//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position of the note list
//! - [`style`]: Theming and colors
//! - [`ScreenLayout`]: Where each piece of chrome sits, shared by rendering
//!   and mouse hit-testing

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::render;

use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Width of the sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 28;
/// Width of the search box in the header.
pub const SEARCH_BOX_WIDTH: u16 = 32;
/// Blank columns between the editor pane edge and its text.
pub const EDITOR_LEFT_PADDING: u16 = 2;
/// Rows moved per scroll-wheel notch over the note list.
pub const LIST_SCROLL_STEP: usize = 3;

/// Areas of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub search_box: Rect,
    pub sidebar: Rect,
    pub notes_label: Rect,
    pub new_note_button: Rect,
    pub note_list: Rect,
    pub editor: Rect,
    pub editor_title: Rect,
    pub editor_separator: Rect,
    pub editor_content: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [_, search_box] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SEARCH_BOX_WIDTH)])
                .areas(header);
        let [sidebar, editor] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body);
        // Sidebar right column holds the divider
        let sidebar_inner = Rect {
            width: sidebar.width.saturating_sub(1),
            ..sidebar
        };
        let [notes_label, new_note_button, _, note_list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(sidebar_inner);
        let [editor_title, editor_separator, editor_content] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(editor);
        let editor_content = Rect {
            x: editor_content.x.saturating_add(EDITOR_LEFT_PADDING),
            width: editor_content
                .width
                .saturating_sub(EDITOR_LEFT_PADDING.saturating_mul(2)),
            ..editor_content
        };

        Self {
            header,
            search_box,
            sidebar,
            notes_label,
            new_note_button,
            note_list,
            editor,
            editor_title,
            editor_separator,
            editor_content,
            status,
        }
    }

    /// Row of the note list under a point, relative to the list top.
    pub fn list_row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.note_list
            .contains(Position::new(column, row))
            .then(|| usize::from(row - self.note_list.y))
    }

    pub fn on_new_note_button(&self, column: u16, row: u16) -> bool {
        self.new_note_button.contains(Position::new(column, row))
    }
}

#[cfg(test)]
mod tests;
