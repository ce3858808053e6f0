use tracing::{info, warn};

use crate::app::{App, Message, Model, ToastLevel};
use crate::vault::SaveOutcome;

impl App {
    /// Run the file I/O a message asks for, after `update` has applied it.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::SaveNote => Self::save_selected(model),
            Message::DeleteNote(idx) => Self::delete_note(model, *idx),
            Message::Quit => Self::save_all(model),
            _ => {}
        }
    }

    fn save_selected(model: &mut Model) {
        let vault = model.vault.clone();
        match model.notebook.save_selected(&vault) {
            None => {}
            Some(Ok(SaveOutcome::Clean)) => model.show_toast(ToastLevel::Info, "No changes"),
            Some(Ok(SaveOutcome::Written)) => model.show_toast(ToastLevel::Info, "Saved"),
            Some(Ok(SaveOutcome::Renamed { from })) => {
                info!(from = %from.display(), "note file renamed");
                model.show_toast(ToastLevel::Info, "Saved");
            }
            Some(Err(err)) => {
                warn!(%err, "save failed");
                model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
            }
        }
    }

    fn delete_note(model: &mut Model, idx: usize) {
        let vault = model.vault.clone();
        match model.notebook.delete(idx, &vault) {
            Ok(Some(note)) => {
                model.hover = None;
                model.rename_buffer = None;
                model.show_toast(ToastLevel::Info, format!("Deleted \"{}\"", note.title()));
            }
            Ok(None) => {}
            Err(err) => {
                warn!(%err, "delete failed");
                model.show_toast(ToastLevel::Error, format!("Delete failed: {err}"));
            }
        }
        model.sync_list_viewport();
    }

    fn save_all(model: &mut Model) {
        let vault = model.vault.clone();
        let failures = model.notebook.save_all(&vault);
        if failures.is_empty() {
            info!(notes = model.notebook.len(), "saved all notes");
        } else {
            // Logged per note by the vault; the app still exits
            model.show_toast(
                ToastLevel::Error,
                format!("{} note(s) could not be saved", failures.len()),
            );
        }
    }
}
