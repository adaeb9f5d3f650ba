//! Invisible-character highlighting.
//!
//! Non-breaking spaces are indistinguishable from plain spaces on screen,
//! so hosts can ask for highlight spans over the visible text. Spans are
//! derived state: recomputed from scratch for every visible range the host
//! reports, never cached across document or viewport changes.

use crate::chars::{EM_DASH, NBSP};

/// The character class a highlight span marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// A non-breaking space (U+00A0)
    NonBreakingSpace,
    /// An em dash (U+2014)
    EmDash,
}

/// A highlighted character range, half-open (`start..end`).
///
/// Offsets count characters from the same origin as the `base` handed to
/// [`scan_invisibles`]; pass the visible range's document offset to get
/// document-relative spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Start offset (inclusive), in characters
    pub start: usize,
    /// End offset (exclusive), in characters
    pub end: usize,
    /// The marked character class
    pub kind: HighlightKind,
}

/// Scan a visible text slice for characters worth highlighting.
///
/// Pure and re-entrant: the host calls it again after every document change
/// or scroll, and each call yields a fresh, complete set of spans for the
/// slice.
pub fn scan_invisibles(text: &str, base: usize) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();

    for (offset, ch) in text.chars().enumerate() {
        let kind = match ch {
            NBSP => HighlightKind::NonBreakingSpace,
            EM_DASH => HighlightKind::EmDash,
            _ => continue,
        };
        spans.push(HighlightSpan {
            start: base + offset,
            end: base + offset + 1,
            kind,
        });
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_both_kinds() {
        let spans = scan_invisibles("a\u{00A0}b—c", 0);
        assert_eq!(
            spans,
            vec![
                HighlightSpan {
                    start: 1,
                    end: 2,
                    kind: HighlightKind::NonBreakingSpace
                },
                HighlightSpan {
                    start: 3,
                    end: 4,
                    kind: HighlightKind::EmDash
                },
            ]
        );
    }

    #[test]
    fn test_spans_are_document_relative() {
        let spans = scan_invisibles("x\u{00A0}", 100);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 101);
        assert_eq!(spans[0].end, 102);
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        assert!(scan_invisibles("rien de spécial ici", 0).is_empty());
        assert!(scan_invisibles("", 7).is_empty());
    }

    #[test]
    fn test_rescan_is_stable() {
        let text = "un\u{00A0}— deux";
        assert_eq!(scan_invisibles(text, 5), scan_invisibles(text, 5));
    }
}
