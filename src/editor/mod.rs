//! Byte-level text buffer for note editing.
//!
//! Provides an append-only UTF-8 buffer whose insertions and deletions
//! always operate on whole codepoints, designed for integration into the
//! TEA architecture.

mod buffer;

pub use buffer::{EditError, TAB_SPACES, TextBuffer, encode_codepoint};
