//! Rope-backed document buffer.
//!
//! [`Document`] wraps a [`ropey::Rope`] and exposes the line/column view the
//! rest of the engine works in. It expects LF-normalized text (see
//! [`crate::line_ending`]); a stray `'\r'` before a newline is tolerated and
//! stays out of both line text and column budgets.
//!
//! All conversions clamp out-of-range input instead of panicking: a line
//! past the end maps to the end of the document, a column past the end of a
//! line maps to the end of that line.

use crate::position::{Position, PositionRange};
use crate::rules::EditDirective;
use ropey::Rope;

/// An in-memory document addressed by `(line, column)` positions.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get the complete text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Whether the document contains no text
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Total line count (an empty document has one empty line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Text of the given line, without its trailing newline.
    ///
    /// Returns `None` when `line` is past the last line.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        // Rope's line() includes the newline
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    /// Character offset of a position, clamping both coordinates.
    pub fn position_to_char_offset(&self, position: Position) -> usize {
        if position.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(position.line);
        let mut line_len = if position.line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(position.line + 1) - line_start - 1 // -1 for newline
        } else {
            self.rope.len_chars() - line_start
        };
        // The -1 above leaves the '\r' of a CRLF break in the budget;
        // clamp on the same text line_text() returns.
        if line_len > 0 && self.rope.char(line_start + line_len - 1) == '\r' {
            line_len -= 1;
        }

        line_start + position.column.min(line_len)
    }

    /// Position of a character offset, clamping past-the-end offsets.
    pub fn char_offset_to_position(&self, char_offset: usize) -> Position {
        let char_offset = char_offset.min(self.rope.len_chars());

        let line = self.rope.char_to_line(char_offset);
        let line_start = self.rope.line_to_char(line);

        Position::new(line, char_offset - line_start)
    }

    /// Clamp a position onto the document
    pub fn clamp(&self, position: Position) -> Position {
        self.char_offset_to_position(self.position_to_char_offset(position))
    }

    /// The `count` characters on the cursor's line immediately before the
    /// cursor, in document order.
    ///
    /// Returns `None` when the cursor line does not exist, the cursor sits
    /// past the end of its line, or fewer than `count` characters precede it
    /// on that line.
    pub fn chars_before(&self, cursor: Position, count: usize) -> Option<String> {
        let line = self.line_text(cursor.line)?;
        let line_len = line.chars().count();
        if cursor.column > line_len || cursor.column < count {
            return None;
        }

        Some(
            line.chars()
                .skip(cursor.column - count)
                .take(count)
                .collect(),
        )
    }

    /// Replace a position range with new text.
    ///
    /// An empty range inserts at its start position.
    pub fn replace_range(&mut self, range: PositionRange, text: &str) {
        let start = self.position_to_char_offset(range.start);
        let end = self.position_to_char_offset(range.end);

        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }

    /// Apply an edit directive produced by the rule engine.
    pub fn apply(&mut self, edit: &EditDirective) {
        self.replace_range(edit.range, &edit.text);
    }

    /// Replace the entire content
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}
