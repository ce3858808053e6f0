use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::app::model::HoverTarget;
use crate::app::{App, Message, Model};
use crate::config::ModifierKey;
use crate::ui::LIST_SCROLL_STEP;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            // Press and auto-repeat; releases carry no input
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }
        if modifier_held(key.modifiers, model.modifier) {
            let KeyCode::Char(c) = key.code else {
                return None;
            };
            return match c.to_ascii_lowercase() {
                'n' => Some(Message::NewNote),
                's' => Some(Message::SaveNote),
                'f' => Some(Message::ToggleSearch),
                'q' => Some(Message::Quit),
                _ => None,
            };
        }

        if model.is_renaming() {
            return match key.code {
                KeyCode::Enter => Some(Message::CommitRename),
                KeyCode::Esc => Some(Message::CancelRename),
                KeyCode::Backspace => Some(Message::RenameBackspace),
                KeyCode::Char(c) if is_text(key.modifiers, c) => Some(Message::RenameInput(c)),
                _ => None,
            };
        }

        if model.notebook.search.is_visible() {
            return match key.code {
                KeyCode::Enter => Some(Message::SearchAccept),
                KeyCode::Esc => Some(Message::ToggleSearch),
                KeyCode::Backspace => Some(Message::SearchBackspace),
                KeyCode::Char(c) if is_text(key.modifiers, c) => Some(Message::SearchInput(c)),
                _ => None,
            };
        }

        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::F(2) => Some(Message::StartRename),
            KeyCode::Up if alt => Some(Message::SelectPrevious),
            KeyCode::Down if alt => Some(Message::SelectNext),
            KeyCode::Char(c) if is_text(key.modifiers, c) => Some(Message::InsertChar(c)),
            KeyCode::Backspace => Some(Message::DeleteBackward),
            KeyCode::Enter => Some(Message::InsertNewline),
            KeyCode::Tab => Some(Message::InsertTab),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let layout = model.layout();
        let (col, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.on_new_note_button(col, row) {
                    return Some(Message::NewNote);
                }
                note_under(model, col, row).map(Message::SelectNote)
            }
            MouseEventKind::Down(MouseButton::Right) => {
                note_under(model, col, row).map(Message::DeleteNote)
            }
            MouseEventKind::Moved => {
                let target = if layout.on_new_note_button(col, row) {
                    Some(HoverTarget::NewNoteButton)
                } else {
                    note_under(model, col, row).map(HoverTarget::Note)
                };
                (target != model.hover).then_some(Message::Hover(target))
            }
            MouseEventKind::ScrollUp if layout.sidebar.contains(Position::new(col, row)) => {
                Some(Message::ScrollListUp(LIST_SCROLL_STEP))
            }
            MouseEventKind::ScrollDown if layout.sidebar.contains(Position::new(col, row)) => {
                Some(Message::ScrollListDown(LIST_SCROLL_STEP))
            }
            _ => None,
        }
    }
}

fn modifier_held(modifiers: KeyModifiers, modifier: ModifierKey) -> bool {
    match modifier {
        ModifierKey::Control => modifiers.contains(KeyModifiers::CONTROL),
        ModifierKey::Super => modifiers.contains(KeyModifiers::SUPER),
    }
}

/// Printable input with no command modifier held.
fn is_text(modifiers: KeyModifiers, c: char) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        && u32::from(c) >= 32
        && c != '\u{7f}'
}

fn note_under(model: &Model, col: u16, row: u16) -> Option<usize> {
    let list_row = model.layout().list_row_at(col, row)?;
    model.note_at_list_row(list_row)
}
