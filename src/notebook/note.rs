use std::path::{Path, PathBuf};

use crate::editor::TextBuffer;

/// A single note backed by `<title>.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    content: TextBuffer,
    /// File path derived from the title.
    path: PathBuf,
    /// File this note was last read from or written to.
    on_disk: Option<PathBuf>,
    modified: bool,
}

/// Counts shown in the status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub words: usize,
    pub chars: usize,
}

impl Note {
    /// Create a note that has never been written.
    pub const fn new(title: String, path: PathBuf, content: TextBuffer) -> Self {
        Self {
            title,
            content,
            path,
            on_disk: None,
            modified: true,
        }
    }

    /// Create a note just read from `path`.
    pub fn loaded(title: String, path: PathBuf, content: TextBuffer) -> Self {
        Self {
            title,
            content,
            on_disk: Some(path.clone()),
            path,
            modified: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn content(&self) -> &TextBuffer {
        &self.content
    }

    /// Content for editing. Callers mark the note dirty themselves.
    pub(crate) const fn content_mut(&mut self) -> &mut TextBuffer {
        &mut self.content
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn on_disk(&self) -> Option<&Path> {
        self.on_disk.as_deref()
    }

    /// True when the note has changes not yet written.
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Word and character counts of the body.
    ///
    /// Words are runs of bytes separated by spaces or newlines; characters
    /// are codepoints.
    pub fn stats(&self) -> NoteStats {
        let mut words = 0;
        let mut in_word = false;
        for &byte in self.content.as_bytes() {
            if byte == b' ' || byte == b'\n' {
                in_word = false;
            } else if !in_word {
                in_word = true;
                words += 1;
            }
        }
        NoteStats {
            words,
            chars: self.content.text().chars().count(),
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    pub(crate) fn set_on_disk(&mut self, path: PathBuf) {
        self.on_disk = Some(path);
    }

    /// Mark the note as having unsaved changes.
    pub(crate) const fn touch(&mut self) {
        self.modified = true;
    }

    /// Record a successful write to `path`.
    pub(crate) fn mark_saved(&mut self, path: PathBuf) {
        self.path.clone_from(&path);
        self.on_disk = Some(path);
        self.modified = false;
    }
}
