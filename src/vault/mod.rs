//! Flat-file note storage.
//!
//! A vault is a directory holding one `<title>.md` file per note. The title
//! is the file name without its `.md` suffix; there is no metadata and no
//! nesting.

mod welcome;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ModifierKey;
use crate::editor::TextBuffer;
use crate::notebook::{Limits, Note, NoteError};

pub use welcome::{WELCOME_TITLE, welcome_text};

/// File suffix of note files.
pub const NOTE_EXTENSION: &str = ".md";

/// Failures talking to the vault directory.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create vault {}: {source}", path.display())]
    CreateRoot { path: PathBuf, source: io::Error },
    #[error("failed to list vault {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to remove {}: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },
    #[error("{} already exists", path.display())]
    Occupied { path: PathBuf },
}

/// What a save actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The note had no unsaved changes.
    Clean,
    /// The note was written under its current title.
    Written,
    /// The note was written under a new title and the old file moved.
    Renamed { from: PathBuf },
}

/// Check that a title can be used as a file name stem.
///
/// # Errors
///
/// Rejects empty titles, titles over `max_bytes`, titles containing path
/// separators or control characters, and `.`/`..`.
pub fn validate_title(title: &str, max_bytes: usize) -> Result<(), NoteError> {
    if title.len() > max_bytes {
        return Err(NoteError::TitleTooLong { limit: max_bytes });
    }
    if title.trim().is_empty()
        || title == "."
        || title == ".."
        || title.contains(['/', '\\'])
        || title.chars().any(char::is_control)
    {
        return Err(NoteError::InvalidTitle(title.to_string()));
    }
    Ok(())
}

/// The directory backing a notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    root: PathBuf,
}

impl Default for Vault {
    fn default() -> Self {
        Self::new("vault")
    }
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The vault directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a note title.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.root.join(format!("{title}{NOTE_EXTENSION}"))
    }

    /// Whether a file other than `own` already sits where `title` would be
    /// stored.
    pub fn occupied(&self, title: &str, own: Option<&Path>) -> bool {
        let path = self.path_for(title);
        own != Some(path.as_path()) && path.exists()
    }

    /// Create the vault directory if it does not exist.
    ///
    /// Failure is logged and otherwise ignored; the caller carries on with
    /// whatever `load_all` finds. Returns whether the directory exists.
    pub fn ensure_root(&self) -> bool {
        if self.root.is_dir() {
            return true;
        }
        match fs::create_dir_all(&self.root) {
            Ok(()) => {
                info!(path = %self.root.display(), "created vault");
                true
            }
            Err(source) => {
                let err = StorageError::CreateRoot {
                    path: self.root.clone(),
                    source,
                };
                warn!(%err, "continuing without a vault directory");
                false
            }
        }
    }

    /// Load every `.md` file in the vault, sorted by file name.
    ///
    /// At most `limits.max_notes` files are loaded and each body is cut to
    /// `limits.max_content_bytes`. When nothing loads, a single unsaved
    /// welcome note is returned instead.
    pub fn load_all(&self, limits: &Limits, modifier: ModifierKey) -> Vec<Note> {
        let mut notes = Vec::new();
        match self.note_files() {
            Ok(files) => {
                for (title, path) in files {
                    if notes.len() >= limits.max_notes {
                        warn!(limit = limits.max_notes, "vault has more notes than the limit");
                        break;
                    }
                    if title.len() > limits.max_title_bytes {
                        warn!(path = %path.display(), limit = limits.max_title_bytes, "skipping note with an over-long title");
                        continue;
                    }
                    match read_note(&title, &path, limits) {
                        Ok(note) => notes.push(note),
                        Err(err) => warn!(%err, "skipping unreadable note"),
                    }
                }
            }
            Err(err) => warn!(%err, "vault listing failed"),
        }

        if notes.is_empty() {
            debug!("vault is empty, creating welcome note");
            let (content, _) =
                TextBuffer::from_text(&welcome_text(modifier), limits.max_content_bytes);
            notes.push(Note::new(
                WELCOME_TITLE.to_string(),
                self.path_for(WELCOME_TITLE),
                content,
            ));
        } else {
            info!(count = notes.len(), path = %self.root.display(), "loaded notes");
        }
        notes
    }

    /// Write a note to its file if it has unsaved changes.
    ///
    /// The file name is derived from the current title. When the note was
    /// last stored under another name, that file is moved first so renames
    /// leave no stale copy behind. A file at the target that belongs to
    /// anything else is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Occupied`] if another file already uses the
    /// name, or [`StorageError::Write`] if the file cannot be written. The
    /// note stays modified either way.
    pub fn save(&self, note: &mut Note) -> Result<SaveOutcome, StorageError> {
        if !note.is_modified() {
            return Ok(SaveOutcome::Clean);
        }
        let path = self.path_for(note.title());
        if self.occupied(note.title(), note.on_disk()) {
            return Err(StorageError::Occupied { path });
        }
        note.set_path(path.clone());

        let stale = note
            .on_disk()
            .filter(|old| *old != path.as_path())
            .map(Path::to_path_buf);
        let mut renamed_from = None;
        if let Some(old) = stale {
            match fs::rename(&old, &path) {
                Ok(()) => {
                    note.set_on_disk(path.clone());
                    renamed_from = Some(old);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => {
                    warn!(from = %old.display(), to = %path.display(), %err, "rename failed, old file kept");
                }
            }
        }

        fs::write(&path, note.content().as_bytes()).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        note.mark_saved(path);
        debug!(title = note.title(), bytes = note.content().len(), "saved note");
        Ok(renamed_from.map_or(SaveOutcome::Written, |from| SaveOutcome::Renamed { from }))
    }

    /// Save every modified note.
    ///
    /// Each note is saved independently; failures are collected and the
    /// rest still get written.
    pub fn save_all(&self, notes: &mut [Note]) -> Vec<(String, StorageError)> {
        let mut failures = Vec::new();
        for note in notes.iter_mut() {
            if let Err(err) = self.save(note) {
                warn!(title = note.title(), %err, "save failed");
                failures.push((note.title().to_string(), err));
            }
        }
        failures
    }

    /// Remove a note's backing file. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] for any other failure.
    pub fn remove(&self, note: &Note) -> Result<(), StorageError> {
        let path = note.on_disk().unwrap_or_else(|| note.path());
        match fs::remove_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed note file");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Regular `.md` files in the vault as (title, path), sorted by name.
    fn note_files(&self) -> Result<Vec<(String, PathBuf)>, StorageError> {
        let entries = fs::read_dir(&self.root).map_err(|source| StorageError::ReadDir {
            path: self.root.clone(),
            source,
        })?;
        let mut files: Vec<(String, PathBuf)> = entries
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().ok().is_some_and(|ft| ft.is_file()))
            .filter_map(|e| {
                let name = e.file_name().into_string().ok()?;
                let title = name.strip_suffix(NOTE_EXTENSION)?;
                if title.is_empty() {
                    return None;
                }
                Some((title.to_string(), e.path()))
            })
            .collect();
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

fn read_note(title: &str, path: &Path, limits: &Limits) -> Result<Note, StorageError> {
    let bytes = fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), "note is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    let (content, truncated) = TextBuffer::from_text(&text, limits.max_content_bytes);
    if truncated {
        debug!(path = %path.display(), limit = limits.max_content_bytes, "note truncated on load");
    }
    Ok(Note::loaded(title.to_string(), path.to_path_buf(), content))
}
