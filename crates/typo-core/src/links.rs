//! Markdown link source location.
//!
//! In a rendered view a link shows only its text; the raw markdown holds
//! `[text](url)`. When the host intercepts a click on a rendered link, the
//! locator recovers where in the raw document that link is written, so the
//! caret can be placed on the source instead of following the link.

use crate::document::Document;
use crate::position::Position;
use regex::Regex;
use std::sync::LazyLock;

static LINK_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("valid pattern"));

/// Strip markdown link syntax, keeping only the visible text
/// (`[text](url)` becomes `text`).
pub fn strip_link_syntax(markdown: &str) -> String {
    LINK_SYNTAX.replace_all(markdown, "$1").into_owned()
}

/// Find the raw-source position of a rendered link.
///
/// `context` is the rendered text block around the clicked link, `link_text`
/// the link's visible text. The first line whose stripped text contains the
/// stripped context *and* whose raw text contains `[link_text]` wins; the
/// returned position is that of the `[`, with the column counted in
/// characters. `None` means the caret stays where it is.
pub fn locate_link_source(
    document: &Document,
    context: &str,
    link_text: &str,
) -> Option<Position> {
    let needle = format!("[{link_text}]");
    let stripped_context = strip_link_syntax(context);

    for line in 0..document.line_count() {
        let raw = document.line_text(line)?;
        if !strip_link_syntax(&raw).contains(&stripped_context) {
            continue;
        }
        if let Some(byte) = raw.find(&needle) {
            let column = raw[..byte].chars().count();
            return Some(Position::new(line, column));
        }
    }

    None
}
