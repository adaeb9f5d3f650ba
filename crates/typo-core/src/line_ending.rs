//! Line ending handling.
//!
//! The engine operates on LF (`'\n'`) newlines only: line/column positions,
//! paragraph breaks and front-matter detection all assume it. A host whose
//! files use CRLF (`"\r\n"`) normalizes on load and restores its preferred
//! ending on save.

/// The newline sequence a host prefers when writing a file back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`)
    Lf,
    /// Windows-style CRLF (`"\r\n"`)
    Crlf,
}

impl LineEnding {
    /// Detect the line ending of a source text.
    ///
    /// Any CRLF in the input means [`LineEnding::Crlf`]; otherwise
    /// [`LineEnding::Lf`].
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Normalize a source text to the LF newlines the engine expects.
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n")
    }

    /// Convert an LF-normalized text back to this line ending for saving.
    pub fn restore(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }

    /// The literal newline sequence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(LineEnding::detect("a\nb\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb\r\n"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect("no newline"), LineEnding::Lf);
    }

    #[test]
    fn test_normalize_round_trip() {
        let source = "une ligne\r\nune autre\r\n";
        let normalized = LineEnding::normalize(source);
        assert_eq!(normalized, "une ligne\nune autre\n");
        assert_eq!(LineEnding::detect(source).restore(&normalized), source);
    }

    #[test]
    fn test_restore_lf_is_identity() {
        assert_eq!(LineEnding::Lf.restore("a\nb"), "a\nb");
    }
}
