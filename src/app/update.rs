use tracing::debug;

use crate::app::Model;
use crate::app::model::{HoverTarget, ToastLevel};
use crate::notebook::NoteError;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Notes
    /// Create an "Untitled N" note
    NewNote,
    /// Write the selected note to disk
    SaveNote,
    /// Delete the note at a notebook index (and its file)
    DeleteNote(usize),
    /// Select the note at a notebook index
    SelectNote(usize),
    /// Select the previous note in the list
    SelectPrevious,
    /// Select the next note in the list
    SelectNext,

    // Editing
    /// Append a character to the selected note
    InsertChar(char),
    /// Remove the last character of the selected note
    DeleteBackward,
    /// Append a line break
    InsertNewline,
    /// Append four spaces
    InsertTab,

    // Search
    /// Show or hide the search box
    ToggleSearch,
    /// Append to the search query
    SearchInput(char),
    /// Remove the last query character
    SearchBackspace,
    /// Select the first matching note and close the search box
    SearchAccept,

    // Rename
    /// Start editing the selected note's title
    StartRename,
    /// Append to the title being edited
    RenameInput(char),
    /// Remove the last character of the title being edited
    RenameBackspace,
    /// Apply the edited title
    CommitRename,
    /// Drop the edited title
    CancelRename,

    // Pointer
    /// Update what the pointer is over
    Hover(Option<HoverTarget>),
    /// Scroll the note list up by n rows
    ScrollListUp(usize),
    /// Scroll the note list down by n rows
    ScrollListDown(usize),

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Save everything and quit
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// No file I/O happens here; saving and deleting are side effects run by
/// the event loop after the update.
pub fn update(mut model: Model, msg: Message) -> Model {
    let keeps_scroll = matches!(
        msg,
        Message::ScrollListUp(_) | Message::ScrollListDown(_) | Message::Hover(_)
    );
    match msg {
        Message::NewNote => {
            let vault = model.vault.clone();
            match model.notebook.create(&vault) {
                Ok(idx) => debug!(idx, "new note selected"),
                Err(err) => refuse(&mut model, &err),
            }
        }
        Message::SelectNote(idx) => {
            model.rename_buffer = None;
            model.notebook.select(idx);
        }
        Message::SelectPrevious => {
            model.rename_buffer = None;
            let order = model.visible_note_indices();
            model.notebook.select_previous(&order);
        }
        Message::SelectNext => {
            model.rename_buffer = None;
            let order = model.visible_note_indices();
            model.notebook.select_next(&order);
        }

        Message::InsertChar(ch) => {
            if let Err(err) = model.notebook.insert_codepoint(u32::from(ch)) {
                refuse(&mut model, &err);
            }
        }
        Message::DeleteBackward => {
            model.notebook.delete_backward();
        }
        Message::InsertNewline => {
            if let Err(err) = model.notebook.insert_newline() {
                refuse(&mut model, &err);
            }
        }
        Message::InsertTab => {
            if let Err(err) = model.notebook.insert_tab() {
                refuse(&mut model, &err);
            }
        }

        Message::ToggleSearch => {
            model.rename_buffer = None;
            let visible = model.notebook.search.toggle();
            debug!(visible, "search toggled");
        }
        Message::SearchInput(ch) => model.notebook.search.push(ch),
        Message::SearchBackspace => {
            model.notebook.search.pop();
        }
        Message::SearchAccept => {
            if let Some(&first) = model.visible_note_indices().first() {
                model.notebook.select(first);
            }
            model.notebook.search.hide();
        }

        Message::StartRename => {
            model.rename_buffer = model.notebook.selected().map(|note| note.title().to_string());
        }
        Message::RenameInput(ch) => {
            if let Some(buffer) = model.rename_buffer.as_mut() {
                buffer.push(ch);
            }
        }
        Message::RenameBackspace => {
            if let Some(buffer) = model.rename_buffer.as_mut() {
                buffer.pop();
            }
        }
        Message::CommitRename => commit_rename(&mut model),
        Message::CancelRename => model.rename_buffer = None,

        Message::Hover(target) => model.hover = target,
        Message::ScrollListUp(n) => model.list_viewport.scroll_up(n),
        Message::ScrollListDown(n) => model.list_viewport.scroll_down(n),

        Message::Resize(width, height) => {
            model.screen.width = width;
            model.screen.height = height;
        }

        Message::Quit => model.should_quit = true,

        // File I/O: handled in effects
        Message::SaveNote | Message::DeleteNote(_) => {}
    }

    // Wheel scrolling may move the selection out of view; other changes
    // bring it back.
    if !keeps_scroll {
        model.sync_list_viewport();
    }
    model
}

fn commit_rename(model: &mut Model) {
    let (Some(title), Some(idx)) = (model.rename_buffer.take(), model.notebook.selected_index())
    else {
        return;
    };
    let vault = model.vault.clone();
    match model.notebook.rename(idx, &title, &vault) {
        Ok(true) => model.show_toast(ToastLevel::Info, format!("Renamed to \"{}\"", title.trim())),
        Ok(false) => {}
        Err(err) => {
            // Keep the buffer so the title can be corrected
            model.rename_buffer = Some(title);
            refuse(model, &err);
        }
    }
}

fn refuse(model: &mut Model, err: &NoteError) {
    debug!(%err, "operation refused");
    model.show_toast(ToastLevel::Warning, err.to_string());
}
