//! Sidebar search.
//!
//! The search box filters the note list by a case-insensitive substring
//! match on title or body. An empty query matches every note.

use crate::notebook::Note;

/// Search box state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    visible: bool,
    query: String,
}

impl SearchState {
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the search box and forget the query.
    pub fn hide(&mut self) {
        self.visible = false;
        self.query.clear();
    }

    /// Toggle visibility. Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
        self.visible
    }

    pub fn push(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.query.pop()
    }

    /// Whether `note` passes the filter.
    pub fn matches(&self, note: &Note) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        note.title().to_lowercase().contains(&needle)
            || note.content().text().to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextBuffer;
    use std::path::PathBuf;

    fn note(title: &str, body: &str) -> Note {
        let (content, _) = TextBuffer::from_text(body, 1024);
        Note::loaded(title.to_string(), PathBuf::from(title), content)
    }

    fn searching(query: &str) -> SearchState {
        let mut search = SearchState::default();
        search.show();
        query.chars().for_each(|ch| search.push(ch));
        search
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(SearchState::default().matches(&note("a", "")));
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        assert!(searching("gro").matches(&note("Groceries", "")));
        assert!(!searching("gro").matches(&note("Ideas", "")));
    }

    #[test]
    fn test_matches_body() {
        assert!(searching("şehir").matches(&note("Trip", "Yeni Şehir")));
        assert!(searching("milk").matches(&note("List", "- eggs\n- Milk")));
    }

    #[test]
    fn test_toggle_off_clears_query() {
        let mut search = searching("abc");
        assert!(!search.toggle());
        assert_eq!(search.query(), "");
        assert!(search.toggle());
        assert!(search.is_visible());
    }

    #[test]
    fn test_pop_removes_last_char() {
        let mut search = searching("ab");
        assert_eq!(search.pop(), Some('b'));
        assert_eq!(search.query(), "a");
    }
}
