//! Greedy word wrapping.

use super::types::{TextMeasure, TextSize};

/// Split one logical line into pieces no wider than `width`.
///
/// Scans character by character, remembering the last space in the current
/// run. When the candidate piece grows wider than `width` and a space exists
/// past the first byte of the run, the piece ends at that space and the
/// space itself is dropped. Otherwise the piece keeps growing, so a single
/// word wider than `width` overflows instead of being split.
///
/// An empty line yields one empty piece. A break on a trailing space yields
/// a final empty piece.
pub fn wrap_line<'a>(
    text: &'a str,
    width: u16,
    size: TextSize,
    measure: &impl TextMeasure,
) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut rest = text;
    loop {
        let mut last_space: Option<usize> = None;
        let mut end = rest.len();
        let mut run_width = 0u16;
        for (idx, ch) in rest.char_indices() {
            if ch == ' ' {
                last_space = Some(idx);
            }
            run_width = run_width.saturating_add(measure.char_width(ch, size));
            if run_width > width
                && let Some(space) = last_space.filter(|&space| space > 0)
            {
                end = space;
                break;
            }
        }
        pieces.push(&rest[..end]);
        if end == rest.len() {
            break;
        }
        rest = &rest[end + 1..];
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CellMeasure;

    fn wrap(text: &str, width: u16) -> Vec<&str> {
        wrap_line(text, width, TextSize::Base, &CellMeasure)
    }

    #[test]
    fn test_short_line_is_single_piece() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_empty_line_is_single_empty_piece() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_breaks_at_last_space_and_drops_it() {
        assert_eq!(wrap("alpha beta gamma", 11), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_exact_fit_does_not_break() {
        assert_eq!(wrap("abc def", 7), vec!["abc def"]);
    }

    #[test]
    fn test_long_word_overflows_without_space() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcdefghij"]);
    }

    #[test]
    fn test_long_word_after_short_word_moves_to_next_line() {
        assert_eq!(wrap("ab abcdefghij", 5), vec!["ab", "abcdefghij"]);
    }

    #[test]
    fn test_leading_space_is_not_a_break_point() {
        assert_eq!(wrap(" abcdef", 3), vec![" abcdef"]);
    }

    #[test]
    fn test_break_on_trailing_space_leaves_empty_piece() {
        assert_eq!(wrap("abcd ", 4), vec!["abcd", ""]);
    }

    #[test]
    fn test_wide_glyphs_count_two_cells() {
        assert_eq!(wrap("日本 日本", 4), vec!["日本", "日本"]);
    }

    #[test]
    fn test_greedy_does_not_rebalance() {
        assert_eq!(wrap("a b c d e f", 5), vec!["a b c", "d e f"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wrapped_pieces_fit_when_words_fit(
                width in 4u16..60,
                words in prop::collection::vec("[a-zçşğüö]{1,12}", 1..40),
            ) {
                let words: Vec<String> = words
                    .into_iter()
                    .filter(|w| CellMeasure.width(w, TextSize::Base) < width)
                    .collect();
                let text = words.join(" ");
                for piece in wrap(&text, width) {
                    prop_assert!(CellMeasure.width(piece, TextSize::Base) <= width);
                }
            }

            #[test]
            fn wrapping_only_drops_break_spaces(
                width in 1u16..40,
                text in "[a-z ]{0,120}",
            ) {
                let pieces = wrap(&text, width);
                prop_assert_eq!(pieces.join(" "), text);
            }
        }
    }
}
