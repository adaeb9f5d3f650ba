#![warn(missing_docs)]
//! Typo Core - Headless French Typography Engine
//!
//! # Overview
//!
//! `typo-core` applies French typographic conventions to markdown text as it
//! is written: curly apostrophes, alternating guillemets, em-dash conversion
//! and non-breaking (hard) spaces around punctuation. It is headless: no
//! rendering, no event wiring, no settings UI. The host editor reports
//! keystrokes and clicks, the engine answers with replacement directives,
//! and the host applies them through its own buffer API.
//!
//! # Core Features
//!
//! - **Live typing rules**: `'` → `’`, `"` → alternating `« ` / ` »`,
//!   `--` + space → `— `, optional double line breaks on Enter
//! - **Hard-space pass**: whole-document non-breaking spaces before
//!   `: ; ? ! »` and after `«` `—`, idempotent, with YAML front matter and
//!   HTML tags left byte-identical
//! - **Apostrophe normalization**: one command curling every straight
//!   apostrophe in a document
//! - **Link source location**: maps a clicked rendered link back to its
//!   `[text](url)` source position
//! - **Invisible-character highlighting**: spans over non-breaking spaces
//!   and em dashes in the visible text
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Typographer (session facade)               │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Rules / Spacing / Links / Decorations      │  ← Pure transforms
//! ├─────────────────────────────────────────────┤
//! │  Protected Regions (front matter, tags)     │  ← Structure shield
//! ├─────────────────────────────────────────────┤
//! │  Document (Rope-based line/column buffer)   │  ← Text access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Intercepting keystrokes
//!
//! ```rust
//! use typo_core::{Document, Key, KeyEvent, Position, Typographer};
//!
//! let mut typographer = Typographer::default();
//! let mut document = Document::from_text("Elle a dit ");
//!
//! // The host reports a quotation-mark keystroke at the end of the line
//! let event = KeyEvent::new(Key::Char('"'), Position::new(0, 11));
//! let edit = typographer.handle_key(&event, &document).unwrap();
//! document.apply(&edit);
//!
//! assert_eq!(document.text(), "Elle a dit « ");
//! assert_eq!(edit.cursor, Position::new(0, 13));
//! ```
//!
//! ## Whole-document hard spaces
//!
//! ```rust
//! use typo_core::spacing::insert_hard_spaces;
//!
//! assert_eq!(
//!     insert_hard_spaces("Bonjour: as-tu vu?"),
//!     "Bonjour\u{00A0}: as-tu vu\u{00A0}?",
//! );
//! ```
//!
//! # Module Description
//!
//! - [`engine`] - the [`Typographer`] session facade
//! - [`rules`] - typing rules and the apostrophe command
//! - [`spacing`] - structure-preserving hard-space insertion
//! - [`regions`] - protected-region scanning (front matter, HTML tags)
//! - [`links`] - rendered-link to raw-source location
//! - [`decorations`] - invisible-character highlight spans
//! - [`document`] - Rope-based line/column buffer
//! - [`settings`] - the host-persisted configuration blob
//! - [`session`] - quotation parity
//! - [`line_ending`] - CRLF normalization for hosts that need it
//!
//! # Host Integration
//!
//! All operations run synchronously inside the host's event handling; none
//! block, none cache between calls. Positions are `(line, column)` pairs
//! with columns counted in characters, so the multi-byte characters the
//! engine produces never skew host coordinates.

pub mod chars;
pub mod decorations;
pub mod document;
pub mod engine;
pub mod line_ending;
pub mod links;
pub mod position;
pub mod regions;
pub mod rules;
pub mod session;
pub mod settings;
pub mod spacing;

pub use chars::{
    CLOSING_GUILLEMET, EM_DASH, NBSP, OPENING_GUILLEMET, TYPOGRAPHIC_APOSTROPHE,
};
pub use decorations::{HighlightKind, HighlightSpan, scan_invisibles};
pub use document::Document;
pub use engine::{DocumentRewrite, Typographer};
pub use line_ending::LineEnding;
pub use links::{locate_link_source, strip_link_syntax};
pub use position::{Position, PositionRange};
pub use regions::{ProtectedRegion, RegionKind, protected_regions};
pub use rules::{
    EditDirective, Key, KeyEvent, RuleResult, TextWindow, evaluate, normalize_apostrophes,
};
pub use session::QuoteParity;
pub use settings::{EmptyLineDisplay, Settings};
pub use spacing::insert_hard_spaces;
