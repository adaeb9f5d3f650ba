//! Typographic characters and classification helpers.
//!
//! Every special character the engine emits or inspects is named here once,
//! together with the predicates the spacing rules are built from.

/// Typographic (curly) apostrophe, U+2019
pub const TYPOGRAPHIC_APOSTROPHE: char = '’';

/// Opening French guillemet, U+00AB
pub const OPENING_GUILLEMET: char = '«';

/// Closing French guillemet, U+00BB
pub const CLOSING_GUILLEMET: char = '»';

/// Em dash, U+2014
pub const EM_DASH: char = '—';

/// Non-breaking space, U+00A0
pub const NBSP: char = '\u{00A0}';

/// Punctuation that takes a non-breaking space before it in French
/// typography: `:`, `;`, `?`, `!` and the closing guillemet.
pub fn takes_space_before(ch: char) -> bool {
    matches!(ch, ':' | ';' | '?' | '!' | CLOSING_GUILLEMET)
}

/// Characters that take a non-breaking space after them: the opening
/// guillemet and the em dash.
pub fn takes_space_after(ch: char) -> bool {
    matches!(ch, OPENING_GUILLEMET | EM_DASH)
}

/// Whether `ch` is a plain space or a non-breaking space.
pub fn is_space_or_nbsp(ch: char) -> bool {
    ch == ' ' || ch == NBSP
}
