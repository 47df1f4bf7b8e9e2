//! Player input awaiting validation

use std::fmt;

/// A submitted word, normalized for comparison
///
/// Lowercased and stripped of surrounding whitespace so that "Silk " and
/// "silk" are the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalize raw player input
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::new("  Silk\n");
    /// assert_eq!(candidate.text(), "silk");
    /// assert!(Candidate::new("   ").is_empty());
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_lowercase(),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(Candidate::new("WORM").text(), "worm");
        assert_eq!(Candidate::new("\t milk \n").text(), "milk");
    }

    #[test]
    fn inner_whitespace_kept() {
        assert_eq!(Candidate::new(" ice cream ").text(), "ice cream");
    }

    #[test]
    fn empty_after_trim() {
        assert!(Candidate::new("").is_empty());
        assert!(Candidate::new(" \n\t ").is_empty());
        assert_eq!(Candidate::new(" \n").len(), 0);
    }

    #[test]
    fn len_counts_chars() {
        assert_eq!(Candidate::new("café").len(), 4);
    }
}
