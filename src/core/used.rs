//! Words accepted so far in a session

use rustc_hash::FxHashSet;

/// Accepted words, most recent first, without duplicates
///
/// Only grows during a session; [`UsedWords::clear`] is for starting over.
#[derive(Debug, Clone, Default)]
pub struct UsedWords {
    ordered: Vec<String>,
    index: FxHashSet<String>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `word` was accepted already
    ///
    /// Expects normalized text; stored words are always lowercase and trimmed.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Put `word` at the front
    ///
    /// Returns false and leaves the list untouched if the word is present.
    pub(crate) fn push_front(&mut self, word: String) -> bool {
        if !self.index.insert(word.clone()) {
            return false;
        }
        self.ordered.insert(0, word);
        true
    }

    /// Most recently accepted word
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.ordered.first().map(String::as_str)
    }

    /// Iterate most recent first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Total letters across all accepted words
    #[must_use]
    pub fn letter_total(&self) -> usize {
        self.ordered.iter().map(|w| w.chars().count()).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.ordered.clear();
        self.index.clear();
    }
}
