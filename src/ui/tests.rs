use super::*;
use crate::app::{HoverTarget, Message, Model, update};
use crate::config::ModifierKey;
use crate::editor::TextBuffer;
use crate::notebook::{Limits, Note};
use crate::vault::Vault;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::{Color, Modifier};

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).unwrap()
}

fn model_with(notes: &[(&str, &str)]) -> Model {
    let vault = Vault::new("unused");
    let notes = notes
        .iter()
        .map(|(title, body)| {
            let (content, _) = TextBuffer::from_text(body, 32_767);
            Note::loaded((*title).to_string(), vault.path_for(title), content)
        })
        .collect();
    Model::new(vault, notes, Limits::default(), (80, 24)).with_modifier(ModifierKey::Control)
}

fn draw(model: &Model) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Screen position of the first cell of `needle` below the header.
fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    find_from(buffer, needle, 1)
}

fn find_from(buffer: &Buffer, needle: &str, first_row: u16) -> Option<(u16, u16)> {
    (first_row..buffer.area.height).find_map(|y| {
        let row = row_text(buffer, y);
        row.find(needle).map(|byte| {
            let x = row[..byte].chars().count();
            (u16::try_from(x).unwrap(), y)
        })
    })
}

#[test]
fn test_layout_places_chrome() {
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
    assert_eq!(layout.header, Rect::new(0, 0, 80, 1));
    assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    assert_eq!(layout.sidebar, Rect::new(0, 1, SIDEBAR_WIDTH, 22));
    assert_eq!(layout.new_note_button.y, 2);
    assert_eq!(layout.note_list.y, 4);
    assert_eq!(layout.note_list.height, 19);
    assert_eq!(layout.editor_content.x, SIDEBAR_WIDTH + EDITOR_LEFT_PADDING);
    assert_eq!(layout.editor_content.y, 3);
}

#[test]
fn test_list_row_hit_testing() {
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
    assert_eq!(layout.list_row_at(3, 4), Some(0));
    assert_eq!(layout.list_row_at(3, 10), Some(6));
    assert_eq!(layout.list_row_at(3, 3), None);
    assert_eq!(layout.list_row_at(SIDEBAR_WIDTH + 1, 4), None);
    assert!(layout.on_new_note_button(5, 2));
    assert!(!layout.on_new_note_button(5, 4));
}

#[test]
fn test_render_shows_sidebar_and_header() {
    let model = model_with(&[("Groceries", "milk"), ("Ideas", "")]);
    let terminal = draw(&model);
    let text = screen_text(terminal.backend().buffer());
    assert!(text.contains("mdnotes"));
    assert!(text.contains("/ Groceries"));
    assert!(text.contains("NOTES (2)"));
    assert!(text.contains("+ New Note"));
    assert!(text.contains("Ideas"));
}

#[test]
fn test_render_styles_headings_and_bullets() {
    let model = model_with(&[("Doc", "# Title\n## Sub\n- item\nplain")]);
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();

    let (x, y) = find(buffer, "Title").unwrap();
    let h1 = &buffer[(x, y)];
    assert!(h1.modifier.contains(Modifier::BOLD | Modifier::UNDERLINED));
    assert_eq!(h1.fg, Color::Magenta);

    let (x, y) = find(buffer, "Sub").unwrap();
    assert_eq!(buffer[(x, y)].fg, Color::Blue);

    let (x, y) = find(buffer, "• item").unwrap();
    assert_eq!(buffer[(x, y)].fg, Color::Magenta);
    assert_eq!(buffer[(x + 2, y)].fg, Color::Reset);

    // Markdown prefixes are not shown
    let text = screen_text(buffer);
    assert!(!text.contains("# Title"));
    assert!(!text.contains("- item"));
}

#[test]
fn test_render_wraps_long_lines() {
    let body = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi";
    let model = model_with(&[("Wrap", body)]);
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();
    let layout = ScreenLayout::new(buffer.area);
    let first = row_text(buffer, layout.editor_content.y);
    let second = row_text(buffer, layout.editor_content.y + 1);
    assert!(first.contains("alpha"));
    assert!(first.contains("theta"));
    assert!(second.contains("iota"));
    assert!(!first.contains("iota"));
}

#[test]
fn test_cursor_sits_after_last_character() {
    let model = model_with(&[("Doc", "hello\n- ab")]);
    let mut terminal = draw(&model);
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
    let cursor = terminal.get_cursor_position().unwrap();
    // Bullet indent (2) + "ab"
    assert_eq!(cursor.x, layout.editor_content.x + 4);
    assert_eq!(cursor.y, layout.editor_content.y + 1);
}

#[test]
fn test_cursor_moves_to_new_line_after_enter() {
    let model = update(model_with(&[("Doc", "hello")]), Message::InsertNewline);
    let mut terminal = draw(&model);
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor.x, layout.editor_content.x);
    assert_eq!(cursor.y, layout.editor_content.y + 1);
}

#[test]
fn test_editor_follows_end_of_long_note() {
    let body = (1..=60).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let model = model_with(&[("Long", &body)]);
    let terminal = draw(&model);
    let text = screen_text(terminal.backend().buffer());
    assert!(text.contains("line 60"));
    assert!(!text.lines().any(|row| row.trim_end().ends_with("line 1")));
}

#[test]
fn test_dirty_marker_after_edit() {
    let model = update(model_with(&[("Doc", "x")]), Message::InsertChar('y'));
    let terminal = draw(&model);
    let header = row_text(terminal.backend().buffer(), 0);
    assert!(header.contains("/ Doc •"));
}

#[test]
fn test_empty_state_when_nothing_selected() {
    let model = model_with(&[]);
    let terminal = draw(&model);
    let text = screen_text(terminal.backend().buffer());
    assert!(text.contains("No note selected. Press Ctrl+N to create one."));
}

#[test]
fn test_status_bar_shows_counts_and_hints() {
    let model = model_with(&[("Doc", "bir iki üç")]);
    let terminal = draw(&model);
    let status = row_text(terminal.backend().buffer(), 23);
    assert!(status.contains("1 note"));
    assert!(status.contains("3 words"));
    assert!(status.contains("10 chars"));
    assert!(status.contains("Ctrl+S save"));
}

#[test]
fn test_status_bar_shows_toast() {
    let model = update(model_with(&[("A", ""), ("B", "")]), Message::StartRename);
    let mut model = model;
    model.rename_buffer = Some("B".to_string());
    let model = update(model, Message::CommitRename);
    let terminal = draw(&model);
    let status = row_text(terminal.backend().buffer(), 23);
    assert!(status.contains("[warn]"));
    assert!(status.contains("already exists"));
}

#[test]
fn test_search_box_filters_list() {
    let mut model = update(
        model_with(&[("Groceries", ""), ("Ideas", ""), ("Garden", "")]),
        Message::ToggleSearch,
    );
    model = update(model, Message::SearchInput('g'));
    model = update(model, Message::SearchInput('a'));
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 0).contains("Search: ga"));
    let layout = ScreenLayout::new(buffer.area);
    let list: String = (layout.note_list.y..layout.note_list.bottom())
        .map(|y| row_text(buffer, y))
        .collect();
    assert!(list.contains("Garden"));
    assert!(!list.contains("Ideas"));
    assert!(!list.contains("Groceries"));
}

#[test]
fn test_selected_and_hovered_rows_are_highlighted() {
    let model = update(
        model_with(&[("First", ""), ("Second", "")]),
        Message::Hover(Some(HoverTarget::Note(1))),
    );
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();
    let list_top = ScreenLayout::new(buffer.area).note_list.y;
    let (x, y) = find_from(buffer, "First", list_top).unwrap();
    assert!(buffer[(x, y)].modifier.contains(Modifier::REVERSED));
    let (x, y) = find_from(buffer, "Second", list_top).unwrap();
    assert_eq!(buffer[(x, y)].bg, Color::Indexed(238));
}
