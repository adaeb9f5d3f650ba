//! Typing rules.
//!
//! Each typographic feature is one rule: a pure function of the trigger
//! event, the text window around the caret, the settings and the quotation
//! parity. A rule that fires returns the replacement the host applies
//! *instead of* its default insertion; when no rule fires, [`evaluate`]
//! returns `None` and the host proceeds normally.
//!
//! At most one rule fires per keystroke. They are checked in a fixed order
//! (apostrophe, quotation mark, em dash, paragraph break); the trigger keys
//! are distinct, so ordering only matters for future rules sharing one.

use crate::chars::{CLOSING_GUILLEMET, EM_DASH, OPENING_GUILLEMET, TYPOGRAPHIC_APOSTROPHE};
use crate::document::Document;
use crate::position::{Position, PositionRange};
use crate::session::QuoteParity;
use crate::settings::Settings;

/// Platform-independent identity of a pressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, as typed
    Char(char),
    /// The Enter key
    Enter,
}

/// A keystroke event as reported by the host, before the host has applied
/// its default edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key
    pub key: Key,
    /// Caret position at the time of the keystroke
    pub cursor: Position,
    /// The selection, if the host has one
    pub selection: Option<PositionRange>,
}

impl KeyEvent {
    /// A keystroke with no selection
    pub fn new(key: Key, cursor: Position) -> Self {
        Self {
            key,
            cursor,
            selection: None,
        }
    }

    /// Attach the host's selection span
    pub fn with_selection(mut self, selection: PositionRange) -> Self {
        self.selection = Some(selection);
        self
    }

    /// The selection, ignoring empty spans
    fn active_selection(&self) -> Option<PositionRange> {
        self.selection.filter(|span| !span.is_empty())
    }
}

/// The buffer text a rule may inspect: the two characters on the caret's
/// line immediately before the caret.
///
/// Rules never see more of the document than this. Widening the window is
/// an API change, not something a rule can do on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextWindow {
    /// The two characters before the caret, if that many exist on the line
    pub preceding_pair: Option<[char; 2]>,
}

impl TextWindow {
    /// Capture the window around `cursor` in `document`.
    pub fn capture(document: &Document, cursor: Position) -> Self {
        let preceding_pair = document.chars_before(cursor, 2).and_then(|pair| {
            let mut chars = pair.chars();
            Some([chars.next()?, chars.next()?])
        });
        Self { preceding_pair }
    }

    /// A window with nothing inspectable before the caret
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A replacement the host applies in place of its default edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDirective {
    /// The replaced range (`start == end` inserts)
    pub range: PositionRange,
    /// The replacement text
    pub text: String,
    /// Where the caret lands afterwards
    pub cursor: Position,
}

impl EditDirective {
    fn insert(at: Position, text: impl Into<String>, cursor: Position) -> Self {
        Self {
            range: PositionRange::caret(at),
            text: text.into(),
            cursor,
        }
    }
}

/// The outcome of a fired rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    /// The replacement directive for the host
    pub edit: EditDirective,
    /// The quotation parity after this keystroke, when the quotation rule
    /// fired
    pub quotes: Option<QuoteParity>,
}

/// Evaluate one keystroke against the typing rules.
///
/// Pure: the same inputs always produce the same result. The caller owns
/// the parity side effect (see
/// [`Typographer::handle_key`](crate::Typographer::handle_key)).
pub fn evaluate(
    event: &KeyEvent,
    window: &TextWindow,
    settings: &Settings,
    parity: QuoteParity,
) -> Option<RuleResult> {
    if let Some(edit) = apostrophe_rule(event, settings) {
        return Some(RuleResult { edit, quotes: None });
    }
    if let Some((edit, parity)) = quotation_rule(event, settings, parity) {
        return Some(RuleResult {
            edit,
            quotes: Some(parity),
        });
    }
    if let Some(edit) = em_dash_rule(event, window, settings) {
        return Some(RuleResult { edit, quotes: None });
    }
    if let Some(edit) = paragraph_break_rule(event, settings) {
        return Some(RuleResult { edit, quotes: None });
    }
    None
}

/// `'` becomes `’`. A selection is replaced by the single apostrophe.
fn apostrophe_rule(event: &KeyEvent, settings: &Settings) -> Option<EditDirective> {
    if event.key != Key::Char('\'') || !settings.apostrophe {
        return None;
    }

    if let Some(selection) = event.active_selection() {
        let cursor = Position::new(selection.start.line, selection.start.column + 1);
        return Some(EditDirective {
            range: selection,
            text: TYPOGRAPHIC_APOSTROPHE.to_string(),
            cursor,
        });
    }

    let cursor = Position::new(event.cursor.line, event.cursor.column + 1);
    Some(EditDirective::insert(
        event.cursor,
        TYPOGRAPHIC_APOSTROPHE.to_string(),
        cursor,
    ))
}

/// `"` becomes `« ` or ` »`, alternating. The caret lands after both
/// inserted characters, and the parity flips.
fn quotation_rule(
    event: &KeyEvent,
    settings: &Settings,
    parity: QuoteParity,
) -> Option<(EditDirective, QuoteParity)> {
    if event.key != Key::Char('"') || !settings.quotation_marks {
        return None;
    }

    let text = if parity.is_opening() {
        format!("{OPENING_GUILLEMET} ")
    } else {
        format!(" {CLOSING_GUILLEMET}")
    };
    let cursor = Position::new(event.cursor.line, event.cursor.column + 2);

    Some((
        EditDirective::insert(event.cursor, text, cursor),
        parity.flipped(),
    ))
}

/// Space right after `--` replaces the two hyphens with `— `.
///
/// The caret does not move: the two consumed characters and the two
/// inserted ones balance out.
fn em_dash_rule(
    event: &KeyEvent,
    window: &TextWindow,
    settings: &Settings,
) -> Option<EditDirective> {
    if event.key != Key::Char(' ') || !settings.em_dashes {
        return None;
    }
    if window.preceding_pair != Some(['-', '-']) {
        return None;
    }

    let column = event.cursor.column.checked_sub(2)?;
    let start = Position::new(event.cursor.line, column);

    Some(EditDirective {
        range: PositionRange::new(start, event.cursor),
        text: format!("{EM_DASH} "),
        cursor: event.cursor,
    })
}

/// Enter inserts two line breaks, so every paragraph is followed by a
/// blank markdown line. Off by default.
fn paragraph_break_rule(event: &KeyEvent, settings: &Settings) -> Option<EditDirective> {
    if event.key != Key::Enter || !settings.two_enters {
        return None;
    }

    let cursor = Position::new(event.cursor.line + 2, event.cursor.column);
    Some(EditDirective::insert(event.cursor, "\n\n", cursor))
}

/// Replace every straight apostrophe in `text` with the typographic form.
///
/// Idempotent, and both forms occupy one column, so line/column positions
/// taken before the rewrite stay valid afterwards.
pub fn normalize_apostrophes(text: &str) -> String {
    text.replace('\'', "’")
}
