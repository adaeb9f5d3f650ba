//! Logical positions in a document.
//!
//! Positions are zero-based `(line, column)` pairs. Columns count Unicode
//! scalar values (`char`), not bytes, so hosts that address text by
//! line/column keep their coordinates stable across the multi-byte
//! characters this crate produces (`’`, `«`, `»`, `—`, U+00A0).

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (0-based)
    pub line: usize,
    /// Column number (0-based, counted in characters)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A half-open span of document positions (`start..end`).
///
/// A span with `start == end` is an insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRange {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl PositionRange {
    /// Create a new position range
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width range at `at` (an insertion point)
    pub fn caret(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// Whether the range covers no text
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
