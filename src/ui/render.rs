use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{HoverTarget, Model};
use crate::document::{BULLET_GLYPH, CellMeasure, Document, PlacedLine, TextMeasure};

use super::style::{Theme, style_for_line_type};
use super::{ScreenLayout, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let layout = ScreenLayout::new(frame.area());
    let theme = Theme::default();

    render_header(model, frame, &layout, &theme);
    render_sidebar(model, frame, &layout, &theme);
    if model.notebook.selected().is_some() {
        render_editor(model, frame, &layout, &theme);
    } else {
        render_empty_state(model, frame, layout.editor);
    }
    status::render_status_bar(model, frame, layout.status, &theme);
}

fn render_header(model: &Model, frame: &mut Frame, layout: &ScreenLayout, theme: &Theme) {
    let mut spans = vec![Span::raw(" mdnotes")];
    if let Some(note) = model.notebook.selected() {
        spans.push(Span::raw(format!("  / {}", note.title())));
        if note.is_modified() {
            spans.push(Span::styled(" •", theme.dirty_marker));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.header), layout.header);

    let search = &model.notebook.search;
    if search.is_visible() {
        let text = format!(" Search: {}", search.query());
        let cursor_x = layout
            .search_box
            .x
            .saturating_add(text_width(&text))
            .min(layout.search_box.right().saturating_sub(1));
        frame.render_widget(
            Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White)),
            layout.search_box,
        );
        if !model.is_renaming() {
            frame.set_cursor_position(Position::new(cursor_x, layout.search_box.y));
        }
    }
}

fn render_sidebar(model: &Model, frame: &mut Frame, layout: &ScreenLayout, theme: &Theme) {
    frame.render_widget(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.separator),
        layout.sidebar,
    );
    frame.render_widget(
        Paragraph::new(format!(" NOTES ({})", model.notebook.len())).style(theme.label),
        layout.notes_label,
    );

    let button_style = if model.hover == Some(HoverTarget::NewNoteButton) {
        theme.button.patch(theme.hovered)
    } else {
        theme.button
    };
    frame.render_widget(
        Paragraph::new(" + New Note").style(button_style),
        layout.new_note_button,
    );

    let visible = model.visible_note_indices();
    let selected = model.notebook.selected_index();
    let range = model.list_viewport.visible_range();
    let list_area = layout.note_list;
    for (row, &idx) in visible.get(range).unwrap_or_default().iter().enumerate() {
        let Some(note) = model.notebook.get(idx) else {
            continue;
        };
        let Ok(row) = u16::try_from(row) else {
            break;
        };
        let mut style = Style::default();
        if model.hover == Some(HoverTarget::Note(idx)) {
            style = style.patch(theme.hovered);
        }
        if selected == Some(idx) {
            style = style.patch(theme.selected);
        }
        let mut spans = vec![Span::raw(format!(" {}", note.title()))];
        if note.is_modified() {
            spans.push(Span::styled(" •", theme.dirty_marker));
        }
        let area = Rect::new(list_area.x, list_area.y + row, list_area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
    }

    if visible.is_empty() && !model.notebook.is_empty() && list_area.height > 0 {
        frame.render_widget(
            Paragraph::new(" No matches").style(theme.label),
            Rect::new(list_area.x, list_area.y, list_area.width, 1),
        );
    }
}

fn render_editor(model: &Model, frame: &mut Frame, layout: &ScreenLayout, theme: &Theme) {
    let Some(note) = model.notebook.selected() else {
        return;
    };
    let title_area = Rect {
        x: layout.editor_content.x,
        width: layout.editor_content.width,
        ..layout.editor_title
    };

    match model.rename_buffer.as_deref() {
        Some(draft) => {
            let text = format!("Rename: {draft}");
            let cursor_x = title_area
                .x
                .saturating_add(text_width(&text))
                .min(title_area.right().saturating_sub(1));
            frame.render_widget(
                Paragraph::new(text).style(Style::default().add_modifier(Modifier::BOLD)),
                title_area,
            );
            frame.set_cursor_position(Position::new(cursor_x, title_area.y));
        }
        None => frame.render_widget(
            Paragraph::new(note.title()).style(Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        ),
    }
    let separator = "─".repeat(usize::from(title_area.width));
    frame.render_widget(
        Paragraph::new(separator).style(theme.separator),
        Rect {
            x: title_area.x,
            width: title_area.width,
            ..layout.editor_separator
        },
    );

    let area = layout.editor_content;
    if area.width == 0 || area.height == 0 {
        return;
    }
    let measure = CellMeasure;
    let text = note.content().text();
    let document = Document::layout(&text, area.width, &measure);
    // Keep the end of the text, where typing happens, in view
    let offset = document.tail_offset(area.height, &measure);
    let placed = document.visible_lines(offset, area.height, &measure);
    for entry in &placed {
        render_line(frame, area, entry, theme, &measure);
    }

    if model.is_renaming() || model.notebook.search.is_visible() {
        return;
    }
    let cursor = match document.end_position(&measure) {
        None => Some(Position::new(area.x, area.y)),
        Some((idx, x)) => idx
            .checked_sub(offset)
            .and_then(|visible_idx| placed.get(visible_idx))
            .map(|entry| {
                let x = area.x.saturating_add(x).min(area.right().saturating_sub(1));
                Position::new(x, area.y + entry.y)
            }),
    };
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn render_line(
    frame: &mut Frame,
    area: Rect,
    entry: &PlacedLine<'_>,
    theme: &Theme,
    measure: &impl TextMeasure,
) {
    let line = entry.line;
    let style = style_for_line_type(line.line_type());
    let indent = line.indent(measure);
    let mut spans = Vec::with_capacity(2);
    if line.shows_bullet() {
        spans.push(Span::styled(format!("{BULLET_GLYPH} "), theme.bullet));
    } else if indent > 0 {
        spans.push(Span::raw(" ".repeat(usize::from(indent))));
    }
    spans.push(Span::styled(line.content(), style));
    let row = Rect::new(area.x, area.y + entry.y, area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn render_empty_state(model: &Model, frame: &mut Frame, area: Rect) {
    let message = format!(
        "No note selected. Press {} to create one.",
        model.modifier.shortcut('N')
    );
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Indexed(245))),
        middle,
    );
}

fn text_width(text: &str) -> u16 {
    CellMeasure.width(text, crate::document::TextSize::Base)
}
