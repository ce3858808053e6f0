//! Scroll state for the sidebar note list.
//!
//! The [`Viewport`] tracks which rows of the list are visible and keeps
//! the offset inside `[0, max(0, total - height)]` after every change.

use std::ops::Range;

/// Manages the visible portion of a list.
///
/// # Example
///
/// ```
/// use mdnotes::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(10, 25);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.scroll_down(3);
/// assert_eq!(vp.visible_range(), 3..13);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    height: u16,
    offset: usize,
    total: usize,
}

impl Viewport {
    /// Create a viewport `height` rows tall over `total` rows.
    pub const fn new(height: u16, total: usize) -> Self {
        Self {
            height,
            offset: 0,
            total,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of rows.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Get the range of visible rows, clamped to the list.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total);
        let end = (self.offset + self.height as usize).min(self.total);
        start..end
    }

    /// Scroll up by n rows.
    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n rows.
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    /// Scroll just enough for `row` to be visible.
    pub fn ensure_visible(&mut self, row: usize) {
        let height = self.height as usize;
        if row < self.offset {
            self.offset = row;
        } else if height > 0 && row >= self.offset + height {
            self.offset = row + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Resize the viewport, re-clamping the offset.
    pub fn resize(&mut self, height: u16) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the number of rows (e.g. after a note is added or filtered).
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Calculate the maximum valid offset.
    const fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.height as usize)
    }
}
