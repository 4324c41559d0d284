//! Line ending detection and normalization.
//!
//! Session buffers store LF (`'\n'`) newlines only. Content arriving with
//! CRLF (or stray CR) is normalized on load; the detected ending is kept so
//! the host can reproduce it when exporting the buffer.

use std::borrow::Cow;

/// The newline convention a document arrived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the convention of `text`: any CRLF pair means [`LineEnding::Crlf`].
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Normalize `text` to LF newlines.
    ///
    /// CRLF pairs and lone CRs both become `'\n'`. Borrows when the input is
    /// already clean.
    pub fn normalize(text: &str) -> Cow<'_, str> {
        if !text.contains('\r') {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\r' {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }

    /// Re-apply this convention to an LF-normalized text.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_and_normalize_crlf() {
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::normalize("a\r\nb\rc"), "a\nb\nc");
        assert!(matches!(LineEnding::normalize("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_apply_round_trips() {
        assert_eq!(LineEnding::Crlf.apply("a\nb"), "a\r\nb");
        assert_eq!(LineEnding::Lf.apply("a\nb"), "a\nb");
    }
}
