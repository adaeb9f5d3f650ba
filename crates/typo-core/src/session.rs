//! Session-scoped quotation state.
//!
//! French guillemets come in pairs, but the keyboard has a single
//! quotation-mark key, so the engine alternates between the opening and
//! closing form. The parity lives in the session facade
//! ([`Typographer`](crate::Typographer)), never in process-global state;
//! a host that wants per-document pairing holds one facade per document,
//! one that wants editor-wide pairing shares a single facade.

/// Which guillemet the next quotation-mark keystroke produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteParity {
    /// The next quotation mark opens a quotation (`« `)
    Opening,
    /// The next quotation mark closes a quotation (` »`)
    Closing,
}

impl QuoteParity {
    /// Whether the next quotation mark opens a quotation
    pub fn is_opening(self) -> bool {
        matches!(self, Self::Opening)
    }

    /// The parity after one more quotation mark has been produced
    pub fn flipped(self) -> Self {
        match self {
            Self::Opening => Self::Closing,
            Self::Closing => Self::Opening,
        }
    }
}

impl Default for QuoteParity {
    fn default() -> Self {
        Self::Opening
    }
}
