use tracing::debug;

use crate::editor::TextBuffer;
use crate::search::SearchState;
use crate::vault::{SaveOutcome, StorageError, Vault, validate_title};

use super::{Limits, Note, NoteError};

/// The ordered collection of notes plus selection and edit state.
///
/// Invariant: `selected` is `Some(i)` with `i < len()` whenever the notebook
/// is non-empty, and `None` only when it is empty.
#[derive(Debug, Clone, Default)]
pub struct Notebook {
    notes: Vec<Note>,
    selected: Option<usize>,
    /// Byte offset of the edit cursor in the selected note.
    cursor: usize,
    limits: Limits,
    /// Sidebar search filter
    pub search: SearchState,
}

impl Notebook {
    /// Create a notebook, selecting the first note if there is one.
    ///
    /// Notes beyond `limits.max_notes` are dropped.
    pub fn new(mut notes: Vec<Note>, limits: Limits) -> Self {
        notes.truncate(limits.max_notes);
        let mut notebook = Self {
            notes,
            selected: None,
            cursor: 0,
            limits,
            search: SearchState::default(),
        };
        notebook.select(0);
        notebook
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Note> {
        self.selected.and_then(|idx| self.notes.get(idx))
    }

    /// Byte offset of the edit cursor.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when any note has unsaved changes.
    pub fn has_unsaved(&self) -> bool {
        self.notes.iter().any(Note::is_modified)
    }

    /// Whether a note other than `except` already uses `title`.
    pub fn title_taken(&self, title: &str, except: Option<usize>) -> bool {
        self.notes
            .iter()
            .enumerate()
            .any(|(idx, note)| Some(idx) != except && note.title() == title)
    }

    /// Create an empty "Untitled N" note and select it.
    ///
    /// N starts at the note count plus one and is bumped past titles that
    /// are already in use, in memory or on disk.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::StoreFull`] when the notebook is at capacity.
    pub fn create(&mut self, vault: &Vault) -> Result<usize, NoteError> {
        if self.notes.len() >= self.limits.max_notes {
            return Err(NoteError::StoreFull {
                limit: self.limits.max_notes,
            });
        }
        let mut number = self.notes.len() + 1;
        let title = loop {
            let candidate = format!("Untitled {number}");
            if !self.title_taken(&candidate, None) && !vault.occupied(&candidate, None) {
                break candidate;
            }
            number += 1;
        };
        let path = vault.path_for(&title);
        debug!(%title, "created note");
        self.notes.push(Note::new(
            title,
            path,
            TextBuffer::new(self.limits.max_content_bytes),
        ));
        let index = self.notes.len() - 1;
        self.selected = Some(index);
        self.cursor = 0;
        Ok(index)
    }

    /// Delete the note at `index` along with its file.
    ///
    /// Out-of-range indices do nothing and return `Ok(None)`. Survivors keep
    /// their order and the selection is clamped into range.
    ///
    /// # Errors
    ///
    /// If the file exists but cannot be removed, the note is kept and the
    /// storage error is returned.
    pub fn delete(&mut self, index: usize, vault: &Vault) -> Result<Option<Note>, StorageError> {
        let Some(note) = self.notes.get(index) else {
            return Ok(None);
        };
        vault.remove(note)?;
        let removed = self.notes.remove(index);
        debug!(title = removed.title(), index, "deleted note");

        self.selected = match self.selected {
            _ if self.notes.is_empty() => None,
            Some(sel) if sel >= self.notes.len() => Some(self.notes.len() - 1),
            Some(sel) => Some(sel),
            None => Some(0),
        };
        self.cursor = self.selected().map_or(0, |n| n.content().len());
        Ok(Some(removed))
    }

    /// Select the note at `index` and put the cursor at the end of its text.
    ///
    /// Returns `false` for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(note) = self.notes.get(index) else {
            return false;
        };
        self.cursor = note.content().len();
        self.selected = Some(index);
        true
    }

    /// Select the next note in `order` after the current selection.
    pub fn select_next(&mut self, order: &[usize]) -> bool {
        let next = match self.selected.and_then(|sel| order.iter().position(|&i| i == sel)) {
            Some(pos) => order.get(pos + 1),
            None => order.first(),
        };
        next.copied().is_some_and(|idx| self.select(idx))
    }

    /// Select the note in `order` before the current selection.
    pub fn select_previous(&mut self, order: &[usize]) -> bool {
        let prev = match self.selected.and_then(|sel| order.iter().position(|&i| i == sel)) {
            Some(pos) => pos.checked_sub(1).and_then(|p| order.get(p)),
            None => order.last(),
        };
        prev.copied().is_some_and(|idx| self.select(idx))
    }

    /// Indices of notes matching the search filter, in notebook order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| self.search.matches(note))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Change a note's title. The file follows on the next save.
    ///
    /// # Errors
    ///
    /// Refuses titles that are not valid file names, that another note
    /// already uses, or whose file already exists in the vault.
    pub fn rename(&mut self, index: usize, title: &str, vault: &Vault) -> Result<bool, NoteError> {
        let title = title.trim();
        validate_title(title, self.limits.max_title_bytes)?;
        let own = self.notes.get(index).and_then(Note::on_disk);
        if self.title_taken(title, Some(index)) || vault.occupied(title, own) {
            return Err(NoteError::DuplicateTitle(title.to_string()));
        }
        let Some(note) = self.notes.get_mut(index) else {
            return Ok(false);
        };
        if note.title() == title {
            return Ok(false);
        }
        debug!(from = note.title(), to = title, "renamed note");
        note.set_title(title.to_string());
        note.set_path(vault.path_for(title));
        note.touch();
        Ok(true)
    }

    /// Append a printable codepoint to the selected note.
    ///
    /// Returns `Ok(false)` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Refused codepoints and full buffers leave the note unchanged.
    pub fn insert_codepoint(&mut self, cp: u32) -> Result<bool, NoteError> {
        self.edit(|buf| buf.insert_codepoint(cp))
    }

    /// Append a newline to the selected note.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Edit`] when the note is full.
    pub fn insert_newline(&mut self) -> Result<bool, NoteError> {
        self.edit(TextBuffer::insert_newline)
    }

    /// Append four spaces to the selected note.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Edit`] when the note is full.
    pub fn insert_tab(&mut self) -> Result<bool, NoteError> {
        self.edit(TextBuffer::insert_tab)
    }

    /// Remove the last codepoint of the selected note.
    ///
    /// Returns whether anything was removed.
    pub fn delete_backward(&mut self) -> bool {
        let Some(note) = self.selected.and_then(|idx| self.notes.get_mut(idx)) else {
            return false;
        };
        if note.content_mut().delete_backward().is_none() {
            return false;
        }
        note.touch();
        self.cursor = note.content().len();
        true
    }

    /// Save the selected note.
    ///
    /// Returns `None` when nothing is selected.
    pub fn save_selected(&mut self, vault: &Vault) -> Option<Result<SaveOutcome, StorageError>> {
        let note = self.selected.and_then(|idx| self.notes.get_mut(idx))?;
        Some(vault.save(note))
    }

    /// Save every modified note, returning the failures.
    pub fn save_all(&mut self, vault: &Vault) -> Vec<(String, StorageError)> {
        vault.save_all(&mut self.notes)
    }

    fn edit(
        &mut self,
        op: impl FnOnce(&mut TextBuffer) -> Result<(), crate::editor::EditError>,
    ) -> Result<bool, NoteError> {
        let Some(note) = self.selected.and_then(|idx| self.notes.get_mut(idx)) else {
            return Ok(false);
        };
        op(note.content_mut())?;
        note.touch();
        self.cursor = note.content().len();
        Ok(true)
    }
}
