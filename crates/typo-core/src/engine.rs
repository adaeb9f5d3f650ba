//! The session facade.
//!
//! [`Typographer`] owns the settings and the quotation parity for one
//! editing session, dispatches keystrokes through the pure rule layer, and
//! fronts the whole-document operations. Hosts decide its scope: one value
//! per document gives per-document quote pairing, one shared value gives
//! editor-wide pairing.

use crate::decorations::{self, HighlightSpan};
use crate::document::Document;
use crate::links;
use crate::position::Position;
use crate::rules::{self, EditDirective, KeyEvent, TextWindow};
use crate::session::QuoteParity;
use crate::settings::Settings;
use crate::spacing;

/// A whole-document rewrite plus the caret to restore afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRewrite {
    /// The full replacement text
    pub text: String,
    /// The caret to restore, by line and column
    pub cursor: Position,
}

/// The per-session typography engine.
///
/// ```rust
/// use typo_core::{Document, Key, KeyEvent, Position, Typographer};
///
/// let mut typographer = Typographer::default();
/// let mut document = Document::from_text("it");
///
/// let event = KeyEvent::new(Key::Char('\''), Position::new(0, 2));
/// let edit = typographer.handle_key(&event, &document).unwrap();
/// document.apply(&edit);
///
/// assert_eq!(document.text(), "it’");
/// assert_eq!(edit.cursor, Position::new(0, 3));
/// ```
#[derive(Debug, Clone)]
pub struct Typographer {
    settings: Settings,
    quotes: QuoteParity,
}

impl Typographer {
    /// Create an engine with the given settings. Quotation parity starts
    /// at opening.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            quotes: QuoteParity::Opening,
        }
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings access; hosts apply persisted blobs here
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Current quotation parity
    pub fn quote_parity(&self) -> QuoteParity {
        self.quotes
    }

    /// Reset the quotation parity to opening. Hosts with per-document
    /// pairing call this when switching documents.
    pub fn reset_quotes(&mut self) {
        self.quotes = QuoteParity::Opening;
    }

    /// Dispatch one keystroke.
    ///
    /// When a rule intercepts it, applies the quote-parity side effect and
    /// returns the replacement directive for the host to apply. `None`
    /// means the host's default behavior proceeds.
    pub fn handle_key(&mut self, event: &KeyEvent, document: &Document) -> Option<EditDirective> {
        let window = TextWindow::capture(document, event.cursor);
        let result = rules::evaluate(event, &window, &self.settings, self.quotes)?;

        if let Some(parity) = result.quotes {
            self.quotes = parity;
        }
        Some(result.edit)
    }

    /// Normalize every straight apostrophe in the document to the
    /// typographic form.
    ///
    /// This is an explicit host command, available regardless of the
    /// `apostrophe` typing flag. The caret is restored by line/column,
    /// which both apostrophe forms leave unchanged.
    pub fn normalize_apostrophes(&self, document: &Document, cursor: Position) -> DocumentRewrite {
        DocumentRewrite {
            text: rules::normalize_apostrophes(&document.text()),
            cursor,
        }
    }

    /// Insert French hard spaces across the whole document, leaving front
    /// matter and HTML tags untouched. See [`spacing::insert_hard_spaces`].
    pub fn insert_hard_spaces(&self, document: &Document) -> String {
        spacing::insert_hard_spaces(&document.text())
    }

    /// Locate the raw-markdown source of a clicked rendered link.
    ///
    /// `None` when the `deactivate_links` flag is off or no line matches;
    /// either way the host leaves the caret unmoved.
    pub fn locate_link_source(
        &self,
        document: &Document,
        context: &str,
        link_text: &str,
    ) -> Option<Position> {
        if !self.settings.deactivate_links {
            return None;
        }
        links::locate_link_source(document, context, link_text)
    }

    /// Highlight spans for the invisible characters in a visible slice.
    ///
    /// `base` is the slice's character offset in the document. Empty when
    /// the `highlight_enabled` flag is off.
    pub fn highlight_invisibles(&self, visible_text: &str, base: usize) -> Vec<HighlightSpan> {
        if !self.settings.highlight_enabled {
            return Vec::new();
        }
        decorations::scan_invisibles(visible_text, base)
    }
}

impl Default for Typographer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
