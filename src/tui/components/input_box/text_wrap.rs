//! Wrapping helpers and dimensions for the InputBox.

/// Left + right border consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// The box never shrinks below this many content lines
pub(super) const MIN_VISIBLE_LINES: u16 = 3;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 8;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Content width inside the borders; 0 if the area is too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Number of wrapped lines `text` occupies at `width`.
///
/// textwrap drops the empty line after a trailing newline, which would
/// leave the cursor with nowhere to go, so it is counted here.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }
    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }
    count
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_line_count_empty_is_one() {
        assert_eq!(wrap_line_count("", 10), 1);
        assert_eq!(wrap_line_count("abc", 0), 1);
    }

    #[test]
    fn test_wrap_line_count_wraps_long_words() {
        assert_eq!(wrap_line_count("abcdefghij", 5), 2);
    }

    #[test]
    fn test_wrap_line_count_counts_trailing_newline() {
        assert_eq!(wrap_line_count("abc\n", 10), 2);
    }

    #[test]
    fn test_char_boundaries_multibyte() {
        let text = "aé✨b";
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(next_char_boundary(text, 3), 6);
        assert_eq!(prev_char_boundary(text, 6), 3);
        assert_eq!(prev_char_boundary(text, 0), 0);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }
}
