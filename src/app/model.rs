use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::ModifierKey;
use crate::notebook::{Limits, Note, Notebook};
use crate::ui::ScreenLayout;
use crate::ui::viewport::Viewport;
use crate::vault::Vault;

/// How long a toast stays in the status bar.
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// What the mouse pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    NewNoteButton,
    /// Index into the notebook
    Note(usize),
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Loaded notes, selection and search filter
    pub notebook: Notebook,
    /// Directory the notes live in
    pub vault: Vault,
    /// Modifier held for shortcuts
    pub modifier: ModifierKey,
    /// Scroll position of the note list
    pub list_viewport: Viewport,
    /// Current terminal area
    pub screen: Rect,
    /// Element under the mouse pointer
    pub hover: Option<HoverTarget>,
    /// Title being typed while renaming the selected note
    pub rename_buffer: Option<String>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a model over already loaded notes.
    pub fn new(vault: Vault, notes: Vec<Note>, limits: Limits, terminal_size: (u16, u16)) -> Self {
        let notebook = Notebook::new(notes, limits);
        let screen = Rect::new(0, 0, terminal_size.0, terminal_size.1);
        let list_height = ScreenLayout::new(screen).note_list.height;
        Self {
            list_viewport: Viewport::new(list_height, notebook.len()),
            notebook,
            vault,
            modifier: ModifierKey::default(),
            screen,
            hover: None,
            rename_buffer: None,
            toast: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn with_modifier(mut self, modifier: ModifierKey) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.screen)
    }

    /// Notebook indices shown in the sidebar, in display order.
    pub fn visible_note_indices(&self) -> Vec<usize> {
        self.notebook.visible_indices()
    }

    /// Notebook index of the note drawn at `row` of the list.
    pub fn note_at_list_row(&self, row: usize) -> Option<usize> {
        self.visible_note_indices()
            .get(self.list_viewport.offset() + row)
            .copied()
    }

    pub const fn is_renaming(&self) -> bool {
        self.rename_buffer.is_some()
    }

    /// Bring list scroll in line with the screen size and filter.
    pub(super) fn sync_list_viewport(&mut self) {
        let visible = self.visible_note_indices();
        self.list_viewport.resize(self.layout().note_list.height);
        self.list_viewport.set_total(visible.len());
        if let Some(sel) = self.notebook.selected_index()
            && let Some(row) = visible.iter().position(|&idx| idx == sel)
        {
            self.list_viewport.ensure_visible(row);
        }
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}
