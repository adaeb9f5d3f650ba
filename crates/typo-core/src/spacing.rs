//! Whole-document hard-space insertion.
//!
//! French typography puts a non-breaking space before `:`, `;`, `?`, `!`
//! and `»`, and after `«` and the em dash. [`insert_hard_spaces`] applies
//! both rules across a document in one call, leaves protected regions
//! (front matter, HTML tags) byte-identical, and finally undoes the one
//! false positive the rules create in markdown reference-link definitions
//! (`[label]: url`).
//!
//! Each pass streams character by character and carries the protected
//! regions along, re-anchoring their offsets as the text grows. A region is
//! treated as a single opaque, non-space character: punctuation right after
//! a tag still gets its hard space, and nothing inside the tag is ever
//! rewritten.
//!
//! The transform is idempotent: running it on its own output changes
//! nothing.

use crate::chars::{NBSP, is_space_or_nbsp, takes_space_after, takes_space_before};
use crate::regions::{ProtectedRegion, protected_regions};

/// Apply the French hard-space rules to `text`.
///
/// ```rust
/// use typo_core::spacing::insert_hard_spaces;
///
/// assert_eq!(
///     insert_hard_spaces("Bonjour: as-tu vu?"),
///     "Bonjour\u{00A0}: as-tu vu\u{00A0}?",
/// );
/// ```
pub fn insert_hard_spaces(text: &str) -> String {
    let regions = protected_regions(text);
    let (text, regions) = space_before_pass(text, &regions);
    let (text, regions) = space_after_pass(&text, &regions);
    let (text, _) = reference_link_pass(&text, &regions);
    text
}

/// Copy a protected region into `out` verbatim, recording its new span.
fn emit_region(
    source: &str,
    region: ProtectedRegion,
    out: &mut String,
    moved: &mut Vec<ProtectedRegion>,
) -> Option<char> {
    let body = &source[region.start..region.end];
    let start = out.len();
    out.push_str(body);
    moved.push(ProtectedRegion {
        start,
        end: out.len(),
        kind: region.kind,
    });
    body.chars().next_back()
}

/// A hard space goes before `:`, `;`, `?`, `!` and `»`: one plain space
/// already there is replaced, any other preceding character gets one
/// inserted after it. Punctuation at the very start of the document is
/// left alone.
fn space_before_pass(text: &str, regions: &[ProtectedRegion]) -> (String, Vec<ProtectedRegion>) {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut moved = Vec::with_capacity(regions.len());
    let mut pending = regions.iter().copied().peekable();
    let mut chars = text.char_indices().peekable();
    // Last emitted character and whether it belongs to a protected region
    let mut prev: Option<(char, bool)> = None;

    while let Some(&(at, ch)) = chars.peek() {
        if let Some(&region) = pending.peek() {
            if at >= region.start {
                prev = emit_region(text, region, &mut out, &mut moved).map(|last| (last, true));
                while chars.next_if(|&(index, _)| index < region.end).is_some() {}
                pending.next();
                continue;
            }
        }
        chars.next();

        if takes_space_before(ch) {
            match prev {
                Some((before, false)) if is_space_or_nbsp(before) => {
                    out.pop();
                    out.push(NBSP);
                }
                Some(_) => out.push(NBSP),
                None => {}
            }
        }
        out.push(ch);
        prev = Some((ch, false));
    }

    (out, moved)
}

/// A hard space goes after `«` and the em dash: one following plain space
/// is folded into it, otherwise it is inserted, and at the end of the text
/// it is appended.
fn space_after_pass(text: &str, regions: &[ProtectedRegion]) -> (String, Vec<ProtectedRegion>) {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut moved = Vec::with_capacity(regions.len());
    let mut pending = regions.iter().copied().peekable();
    let mut chars = text.char_indices().peekable();

    while let Some(&(at, ch)) = chars.peek() {
        if let Some(&region) = pending.peek() {
            if at >= region.start {
                emit_region(text, region, &mut out, &mut moved);
                while chars.next_if(|&(index, _)| index < region.end).is_some() {}
                pending.next();
                continue;
            }
        }
        chars.next();
        out.push(ch);

        if takes_space_after(ch) {
            // Regions never start with a space, so the peek cannot steal
            // one from inside a region
            if chars.peek().is_some_and(|&(_, next)| is_space_or_nbsp(next)) {
                chars.next();
            }
            out.push(NBSP);
        }
    }

    (out, moved)
}

/// Markdown reference-link definitions (`[label]: url`) must keep `]:`
/// glued together; the space-before pass cannot tell them apart from prose,
/// so its insertion is undone here.
fn reference_link_pass(text: &str, regions: &[ProtectedRegion]) -> (String, Vec<ProtectedRegion>) {
    let mut out = String::with_capacity(text.len());
    let mut moved = Vec::with_capacity(regions.len());
    let mut pending = regions.iter().copied().peekable();
    let mut chars = text.char_indices().peekable();

    while let Some(&(at, ch)) = chars.peek() {
        if let Some(&region) = pending.peek() {
            if at >= region.start {
                emit_region(text, region, &mut out, &mut moved);
                while chars.next_if(|&(index, _)| index < region.end).is_some() {}
                pending.next();
                continue;
            }
        }
        chars.next();
        out.push(ch);

        if ch == ']' {
            let mut ahead = chars.clone();
            let hard_space = ahead.next().is_some_and(|(_, next)| next == NBSP);
            let colon = ahead.next().is_some_and(|(_, next)| next == ':');
            if hard_space && colon {
                chars.next();
                chars.next();
                out.push(':');
            }
        }
    }

    (out, moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::RegionKind;

    #[test]
    fn test_space_inserted_before_punctuation() {
        assert_eq!(
            insert_hard_spaces("Bonjour: as-tu vu?"),
            "Bonjour\u{00A0}: as-tu vu\u{00A0}?"
        );
    }

    #[test]
    fn test_existing_space_replaced_not_doubled() {
        assert_eq!(insert_hard_spaces("Attends !"), "Attends\u{00A0}!");
        assert_eq!(insert_hard_spaces("Attends\u{00A0}!"), "Attends\u{00A0}!");
    }

    #[test]
    fn test_only_nearest_space_replaced() {
        // With two spaces, only the one touching the punctuation changes
        assert_eq!(insert_hard_spaces("hein  ?"), "hein \u{00A0}?");
    }

    #[test]
    fn test_space_after_guillemet_and_em_dash() {
        assert_eq!(
            insert_hard_spaces("«Bonjour» dit-il — oui"),
            "«\u{00A0}Bonjour\u{00A0}» dit-il —\u{00A0}oui"
        );
    }

    #[test]
    fn test_hard_space_appended_at_end_of_text() {
        assert_eq!(insert_hard_spaces("il dit «"), "il dit «\u{00A0}");
        assert_eq!(insert_hard_spaces("attends —"), "attends —\u{00A0}");
    }

    #[test]
    fn test_punctuation_at_document_start_untouched() {
        assert_eq!(insert_hard_spaces("?"), "?");
        assert_eq!(insert_hard_spaces("!!"), "!\u{00A0}!");
    }

    #[test]
    fn test_newlines_never_consumed() {
        // Punctuation rules insert around newlines, never across them
        assert_eq!(insert_hard_spaces("fin\n: début"), "fin\n\u{00A0}: début");
        assert_eq!(insert_hard_spaces("elle dit «\nnon"), "elle dit «\u{00A0}\nnon");
        let lines_before = "a!\nb?\nc".lines().count();
        assert_eq!(insert_hard_spaces("a!\nb?\nc").lines().count(), lines_before);
    }

    #[test]
    fn test_front_matter_untouched() {
        let text = "---\ntitre: essai\ndate: 2024-05-01\n---\nBonjour: monde";
        let result = insert_hard_spaces(text);
        assert_eq!(
            result,
            "---\ntitre: essai\ndate: 2024-05-01\n---\nBonjour\u{00A0}: monde"
        );
    }

    #[test]
    fn test_html_tags_untouched() {
        let text = "<a href=\"x:y?z\">lien</a> : voilà";
        let result = insert_hard_spaces(text);
        assert_eq!(result, "<a href=\"x:y?z\">lien</a>\u{00A0}: voilà");
    }

    #[test]
    fn test_punctuation_right_after_tag_gets_its_space() {
        assert_eq!(insert_hard_spaces("<b>non</b>!"), "<b>non</b>\u{00A0}!");
    }

    #[test]
    fn test_unterminated_front_matter_is_processed() {
        assert_eq!(
            insert_hard_spaces("---\ntitre: x"),
            "---\ntitre\u{00A0}: x"
        );
    }

    #[test]
    fn test_reference_link_definition_kept_glued() {
        // The URL colon is ordinary prose to the punctuation rule; only the
        // `]:` of the definition is restored
        let result = insert_hard_spaces("[doc]: https://exemple.fr");
        assert_eq!(result, "[doc]: https\u{00A0}://exemple.fr");
        assert!(!result.contains("]\u{00A0}:"));
    }

    #[test]
    fn test_reference_link_cleanup_only_touches_colon_pairs() {
        // A bracket followed by ordinary prose punctuation keeps its space
        assert_eq!(insert_hard_spaces("[fin] !"), "[fin]\u{00A0}!");
    }

    #[test]
    fn test_idempotent_on_mixed_document() {
        let text = "---\ntitre: «Dialogues»\n---\nElle demande: «Pourquoi?»\n\
                    — Parce que! <i>voilà</i>: c'est dit.\n[ref]: https://exemple.fr\n";
        let once = insert_hard_spaces(text);
        assert_eq!(insert_hard_spaces(&once), once);
    }

    #[test]
    fn test_regions_survive_byte_identical() {
        let text = "---\na: b\n---\nx <em class=\"q?\">y</em>: z «fin";
        let before = protected_regions(text);
        let result = insert_hard_spaces(text);
        let after = protected_regions(&result);

        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            assert_eq!(old.kind, new.kind);
            assert_eq!(&text[old.start..old.end], &result[new.start..new.end]);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(insert_hard_spaces(""), "");
    }

    #[test]
    fn test_pass_reanchors_regions() {
        let text = "oui: <b>non</b>";
        let regions = protected_regions(text);
        let (out, moved) = space_before_pass(text, &regions);

        assert_eq!(out, "oui\u{00A0}: <b>non</b>");
        assert_eq!(moved.len(), 2);
        assert_eq!(moved[0].kind, RegionKind::HtmlTag);
        assert_eq!(&out[moved[0].start..moved[0].end], "<b>");
        assert_eq!(&out[moved[1].start..moved[1].end], "</b>");
    }
}
