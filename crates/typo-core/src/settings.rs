//! Host-persisted configuration.
//!
//! The host stores one small settings blob per user and hands it to the
//! engine at session start. Deserialization merges a partial blob over the
//! defaults, so settings saved by an older version stay valid when new
//! fields appear.
//!
//! Some fields are presentation-only: the engine carries them for the host
//! but never consults them itself (`hyphenate`, `highlight_button`,
//! `empty_lines`).

use serde::{Deserialize, Serialize};

/// How the host renders empty lines. Presentation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyLineDisplay {
    /// Full line height
    Normal,
    /// Reduced line height
    Small,
    /// Collapsed entirely
    Invisible,
}

/// Feature flags and presentation options for a typing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Replace typed straight apostrophes with the typographic form
    pub apostrophe: bool,
    /// Replace typed quotation marks with alternating guillemets
    pub quotation_marks: bool,
    /// Convert `--` followed by a space into an em dash
    pub em_dashes: bool,
    /// Insert two line breaks per Enter (markdown paragraph breaks)
    pub two_enters: bool,
    /// Intercept clicks on rendered links and reveal their source instead
    pub deactivate_links: bool,
    /// Hyphenate rendered text. Presentation-only.
    pub hyphenate: bool,
    /// Highlight non-breaking spaces and em dashes in the visible text
    pub highlight_enabled: bool,
    /// Show the host's highlight toggle control. Presentation-only.
    pub highlight_button: bool,
    /// Empty-line rendering mode. Presentation-only.
    pub empty_lines: EmptyLineDisplay,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            apostrophe: true,
            quotation_marks: true,
            em_dashes: true,
            two_enters: false,
            deactivate_links: true,
            hyphenate: true,
            highlight_enabled: false,
            highlight_button: true,
            empty_lines: EmptyLineDisplay::Small,
        }
    }
}
