//! Protected regions.
//!
//! The whole-document spacing pass must leave document structure alone. Two
//! structures are shielded: YAML front-matter blocks delimited by `---`
//! marker lines, and single-line HTML tag spans (`<...>`, shortest match).
//! The scan returns sorted, non-overlapping byte ranges into the scanned
//! text; the spacing passes stream those ranges through byte-identical.

use regex::Regex;
use std::sync::LazyLock;

// Shortest-match tag span; `.` never crosses a line break.
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("valid pattern"));

/// The structure a protected region shields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// A `<...>` span on a single line
    HtmlTag,
    /// A `---`-delimited block, markers included
    FrontMatter,
}

/// A byte span that transformation passes keep byte-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedRegion {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// The structure that produced this region
    pub kind: RegionKind,
}

impl ProtectedRegion {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        start < self.end && self.start < end
    }
}

/// Scan `text` for protected regions, sorted by start offset.
///
/// Front-matter blocks are found first: a line consisting exactly of `---`
/// (a trailing `'\r'` is tolerated) opens a block that runs through the
/// next such line, both marker lines included. An opening marker with no
/// closing marker protects nothing. HTML tags are then matched only outside
/// the front-matter blocks; a `<` with no `>` on the same line likewise
/// protects nothing.
pub fn protected_regions(text: &str) -> Vec<ProtectedRegion> {
    let mut regions = front_matter_blocks(text);

    for found in HTML_TAG.find_iter(text) {
        let inside_front_matter = regions
            .iter()
            .any(|region| region.overlaps(found.start(), found.end()));
        if !inside_front_matter {
            regions.push(ProtectedRegion {
                start: found.start(),
                end: found.end(),
                kind: RegionKind::HtmlTag,
            });
        }
    }

    regions.sort_by_key(|region| region.start);
    regions
}

fn front_matter_blocks(text: &str) -> Vec<ProtectedRegion> {
    let mut blocks = Vec::new();
    let mut open: Option<usize> = None;

    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        if content == "---" {
            match open.take() {
                Some(start) => blocks.push(ProtectedRegion {
                    start,
                    // Through the closing marker, not its newline
                    end: offset + line.len() - usize::from(line.ends_with('\n')),
                    kind: RegionKind::FrontMatter,
                }),
                None => open = Some(offset),
            }
        }

        offset += line.len();
    }

    blocks
}
