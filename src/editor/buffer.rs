use std::borrow::Cow;

use thiserror::Error;

/// Literal replacement inserted for the Tab key.
pub const TAB_SPACES: &[u8] = b"    ";

/// Maximum number of continuation bytes consumed by a single backward delete.
const MAX_CONTINUATION_BYTES: usize = 3;

/// Reasons an edit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// Control codepoints below U+0020 are not text input.
    #[error("control character U+{0:04X} is not insertable")]
    ControlCharacter(u32),
    /// Surrogates and values above U+10FFFF have no UTF-8 encoding.
    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidCodepoint(u32),
    /// The edit would grow the buffer past its byte limit.
    #[error("note is full ({limit} bytes)")]
    BufferFull { limit: usize },
}

/// Encode a codepoint to UTF-8.
///
/// Returns the encoded bytes and how many of them are used, or `None` for
/// surrogates and values above U+10FFFF.
pub const fn encode_codepoint(cp: u32) -> Option<([u8; 4], usize)> {
    let mut out = [0u8; 4];
    // Each arm masks to the bits it stores, so the narrowing casts are exact.
    #[allow(clippy::cast_possible_truncation)]
    let len = if cp <= 0x7F {
        out[0] = cp as u8;
        1
    } else if cp <= 0x7FF {
        out[0] = 0xC0 | (cp >> 6) as u8;
        out[1] = 0x80 | (cp & 0x3F) as u8;
        2
    } else if cp <= 0xFFFF {
        if cp >= 0xD800 && cp <= 0xDFFF {
            return None;
        }
        out[0] = 0xE0 | (cp >> 12) as u8;
        out[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        out[2] = 0x80 | (cp & 0x3F) as u8;
        3
    } else if cp <= 0x10_FFFF {
        out[0] = 0xF0 | (cp >> 18) as u8;
        out[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
        out[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        out[3] = 0x80 | (cp & 0x3F) as u8;
        4
    } else {
        return None;
    };
    Some((out, len))
}

const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// A growable UTF-8 byte buffer with a hard byte limit.
///
/// Text is only ever appended as whole encoded codepoints and removed one
/// trailing codepoint at a time, so the contents stay valid UTF-8.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: Vec<u8>,
    limit: usize,
}

impl TextBuffer {
    /// Create an empty buffer that holds at most `limit` bytes.
    pub const fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
        }
    }

    /// Create a buffer from existing text.
    ///
    /// Text longer than `limit` is cut at the last codepoint boundary that
    /// fits. Returns the buffer and whether anything was cut.
    pub fn from_text(text: &str, limit: usize) -> (Self, bool) {
        let mut end = text.len().min(limit);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let buffer = Self {
            bytes: text.as_bytes()[..end].to_vec(),
            limit,
        };
        (buffer, end < text.len())
    }

    /// Raw contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Contents as text.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Maximum length in bytes.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Append a printable codepoint.
    ///
    /// # Errors
    ///
    /// Refuses control codepoints, non-scalar values, and anything that
    /// would exceed the byte limit. The buffer is unchanged on error.
    pub fn insert_codepoint(&mut self, cp: u32) -> Result<(), EditError> {
        if cp < 32 {
            return Err(EditError::ControlCharacter(cp));
        }
        let (encoded, len) = encode_codepoint(cp).ok_or(EditError::InvalidCodepoint(cp))?;
        self.append(&encoded[..len])
    }

    /// Append a line break.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::BufferFull`] when the buffer has no room.
    pub fn insert_newline(&mut self) -> Result<(), EditError> {
        self.append(b"\n")
    }

    /// Append four spaces.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::BufferFull`] when the buffer has no room.
    pub fn insert_tab(&mut self) -> Result<(), EditError> {
        self.append(TAB_SPACES)
    }

    /// Remove the last codepoint.
    ///
    /// Scans back from the final byte over at most three continuation bytes
    /// and truncates at the byte where the scan stopped. Returns the number
    /// of bytes removed, or `None` when the buffer is empty.
    pub fn delete_backward(&mut self) -> Option<usize> {
        let end = self.bytes.len();
        if end == 0 {
            return None;
        }
        let mut start = end - 1;
        let mut scanned = 0;
        while start > 0 && scanned < MAX_CONTINUATION_BYTES && is_continuation(self.bytes[start])
        {
            start -= 1;
            scanned += 1;
        }
        self.bytes.truncate(start);
        Some(end - start)
    }

    fn append(&mut self, bytes: &[u8]) -> Result<(), EditError> {
        if self.bytes.len() + bytes.len() > self.limit {
            return Err(EditError::BufferFull { limit: self.limit });
        }
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("limit", &self.limit)
            .finish()
    }
}
