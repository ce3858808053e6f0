use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::document::{CellMeasure, TextMeasure, TextSize};

use super::style::Theme;

/// Status bar: note counts (or the active toast) and shortcut hints.
pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    let base = Style::default().bg(theme.status_bg).fg(theme.status_fg);
    let (left_text, left_style) = match model.active_toast() {
        Some((message, level)) => {
            let (prefix, style) = match level {
                ToastLevel::Info => ("[info]", base),
                ToastLevel::Warning => (
                    "[warn]",
                    Style::default().bg(Color::Yellow).fg(Color::Black),
                ),
                ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
            };
            (format!(" {prefix} {message} "), style)
        }
        None => (summary(model), base),
    };

    // Counts or toast first; hints get whatever is left
    let left_width = CellMeasure.width(&left_text, TextSize::Base);
    let [left, right] =
        Layout::horizontal([Constraint::Length(left_width), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(left_text).style(left_style), left);

    let hints = shortcut_hints(model);
    let alignment = if CellMeasure.width(&hints, TextSize::Base) <= right.width {
        Alignment::Right
    } else {
        Alignment::Left
    };
    frame.render_widget(
        Paragraph::new(hints).alignment(alignment).style(base),
        right,
    );
}

fn summary(model: &Model) -> String {
    let count = model.notebook.len();
    let mut text = format!(" {count} {}", if count == 1 { "note" } else { "notes" });
    if let Some(note) = model.notebook.selected() {
        let stats = note.stats();
        text.push_str(&format!("  |  {} words  |  {} chars", stats.words, stats.chars));
    }
    text.push(' ');
    text
}

fn shortcut_hints(model: &Model) -> String {
    let key = |c| model.modifier.shortcut(c);
    if model.is_renaming() {
        return "Enter: rename  Esc: cancel ".to_string();
    }
    if model.notebook.search.is_visible() {
        return format!("Enter: open  Esc/{}: close ", key('F'));
    }
    format!(
        "{} new  {} save  {} search  F2 rename  {} quit ",
        key('N'),
        key('S'),
        key('F'),
        key('Q')
    )
}
