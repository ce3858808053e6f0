//! In-memory note store.
//!
//! The [`Notebook`] owns every loaded [`Note`], the current selection, and
//! the edit cursor. Limits on note count, title length, and body size are
//! explicit [`Limits`] rather than fixed array sizes; operations beyond a
//! limit are refused with a [`NoteError`].

mod note;
mod store;

pub use note::{Note, NoteStats};
pub use store::Notebook;

use thiserror::Error;

use crate::editor::EditError;

/// Default maximum number of notes.
pub const DEFAULT_MAX_NOTES: usize = 100;
/// Default maximum title length in bytes.
pub const DEFAULT_MAX_TITLE_BYTES: usize = 127;
/// Default maximum note body length in bytes.
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 32_767;

/// Capacity limits for a notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_notes: usize,
    pub max_title_bytes: usize,
    pub max_content_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_notes: DEFAULT_MAX_NOTES,
            max_title_bytes: DEFAULT_MAX_TITLE_BYTES,
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
        }
    }
}

/// Refused note operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("notebook is full ({limit} notes)")]
    StoreFull { limit: usize },
    #[error("title is longer than {limit} bytes")]
    TitleTooLong { limit: usize },
    #[error("\"{0}\" cannot be used as a note title")]
    InvalidTitle(String),
    #[error("a note named \"{0}\" already exists")]
    DuplicateTitle(String),
    #[error(transparent)]
    Edit(#[from] EditError),
}
