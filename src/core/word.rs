//! Root word representation
//!
//! A `RootWord` stores the session's letter pool along with per-letter counts
//! for fast sub-multiset checks.

use super::letters::LetterCounts;
use std::fmt;

/// The fixed letter pool of a game session
///
/// Always lowercase, non-empty and purely alphabetic. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    counts: LetterCounts,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Root word must not be empty"),
            Self::InvalidCharacters => write!(f, "Root word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl RootWord {
    /// Create a new root word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("Silkworm").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// assert!(RootWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let counts = LetterCounts::of(&text);
        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.total()
    }

    /// Never true for a constructed root
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.total() == 0
    }

    /// Per-letter counts of the pool
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_creation_valid() {
        let root = RootWord::new("silkworm").unwrap();
        assert_eq!(root.text(), "silkworm");
        assert_eq!(root.len(), 8);
        assert!(!root.is_empty());
    }

    #[test]
    fn root_creation_normalizes() {
        let root = RootWord::new("  SilkWorm\n").unwrap();
        assert_eq!(root.text(), "silkworm");
    }

    #[test]
    fn root_creation_empty() {
        assert_eq!(RootWord::new(""), Err(WordError::Empty));
        assert_eq!(RootWord::new(" \t\n"), Err(WordError::Empty));
    }

    #[test]
    fn root_creation_invalid_characters() {
        assert_eq!(RootWord::new("silk worm"), Err(WordError::InvalidCharacters));
        assert_eq!(RootWord::new("silk3"), Err(WordError::InvalidCharacters));
        assert_eq!(RootWord::new("silk-worm"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn root_counts_duplicates() {
        let root = RootWord::new("balloon").unwrap();
        assert_eq!(root.counts().get('l'), 2);
        assert_eq!(root.counts().get('o'), 2);
        assert_eq!(root.counts().get('b'), 1);
        assert_eq!(root.counts().get('z'), 0);
        assert_eq!(root.counts().distinct(), 5);
    }

    #[test]
    fn root_len_counts_chars_not_bytes() {
        let root = RootWord::new("café").unwrap();
        assert_eq!(root.len(), 4);
        assert_eq!(root.counts().get('é'), 1);
    }

    #[test]
    fn root_display() {
        let root = RootWord::new("listen").unwrap();
        assert_eq!(format!("{root}"), "listen");
    }
}
