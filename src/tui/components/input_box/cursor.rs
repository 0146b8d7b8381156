//! Cursor position and scrolling for the InputBox.
//!
//! The buffer is owned by `InputBox`; every method takes it explicitly.
//! Up/Down move between logical (newline-separated) lines, keeping the
//! character column where possible.

use super::text_wrap::{BORDER_OFFSET, MAX_VISIBLE_LINES, inner_width, wrap_line_count, wrap_options};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Byte offset into the buffer, always on a char boundary
    pub pos: usize,
    /// First wrapped line shown when the content is taller than the box
    pub scroll_offset: u16,
}

/// Byte offset of the `col`-th char of `line`, or its end.
fn byte_at_col(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    fn line_start(buffer: &str, pos: usize) -> usize {
        buffer[..pos].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(buffer: &str, pos: usize) -> usize {
        buffer[pos..].find('\n').map_or(buffer.len(), |i| pos + i)
    }

    pub fn home(&mut self, buffer: &str) -> bool {
        let start = Self::line_start(buffer, self.pos);
        let moved = start != self.pos;
        self.pos = start;
        moved
    }

    pub fn end(&mut self, buffer: &str) -> bool {
        let end = Self::line_end(buffer, self.pos);
        let moved = end != self.pos;
        self.pos = end;
        moved
    }

    /// Moves to the previous (`up`) or next logical line.
    /// Returns `false` at the first/last line.
    pub fn move_line(&mut self, buffer: &str, up: bool) -> bool {
        let start = Self::line_start(buffer, self.pos);
        let col = buffer[start..self.pos].chars().count();

        let target_start = if up {
            if start == 0 {
                return false;
            }
            Self::line_start(buffer, start - 1)
        } else {
            let end = Self::line_end(buffer, self.pos);
            if end == buffer.len() {
                return false;
            }
            end + 1
        };

        let target_end = Self::line_end(buffer, target_start);
        self.pos = target_start + byte_at_col(&buffer[target_start..target_end], col);
        true
    }

    /// Wrapped (row, column) of the cursor inside the content area.
    pub fn row_col(&self, buffer: &str, width: u16) -> (u16, u16) {
        if width == 0 {
            return (0, 0);
        }
        let before = &buffer[..self.pos];
        let row = wrap_line_count(before, width) - 1;

        // Wrapped segments lose trailing spaces, so add back the ones the
        // cursor sits after
        let logical = &before[Self::line_start(before, before.len())..];
        let trimmed = logical.trim_end_matches(' ');
        let trailing = logical.len() - trimmed.len();
        let last_segment = textwrap::wrap(trimmed, wrap_options(width))
            .last()
            .map_or(0, |seg| seg.chars().count());
        let col = (last_segment + trailing) as u16;

        (row, col.min(width))
    }

    /// Keeps the cursor row inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let width = inner_width(area_width);
        if wrap_line_count(buffer, width) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }
        let (row, _) = self.row_col(buffer, width);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Absolute terminal position for the cursor.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let (row, col) = self.row_col(buffer, inner_width(area.width));
        (
            area.x + BORDER_OFFSET + col,
            area.y + BORDER_OFFSET + row.saturating_sub(self.scroll_offset),
        )
    }
}
