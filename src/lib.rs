// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. vault::Vault)
    clippy::module_name_repetitions
)]

//! # mdnotes
//!
//! A terminal notebook that keeps one markdown file per note.
//!
//! mdnotes shows a sidebar of notes next to an editor pane that styles
//! headings and bullet lists as you type. Notes are plain `<title>.md`
//! files in a vault directory.
//!
//! ## Architecture
//!
//! mdnotes uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop, state, and input dispatch
//! - [`vault`]: Reading and writing note files
//! - [`notebook`]: In-memory notes, selection, and limits
//! - [`editor`]: UTF-8 text buffer for note bodies
//! - [`document`]: Line classification, word wrap, and layout
//! - [`search`]: Sidebar search filter
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod notebook;
pub mod search;
pub mod ui;
pub mod vault;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{CellMeasure, Document, TextMeasure};
    pub use crate::notebook::{Limits, Note, Notebook};
    pub use crate::vault::Vault;
}
