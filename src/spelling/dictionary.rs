//! Word-list backed dictionary
//!
//! Loads a newline-delimited word list into a set for case-insensitive
//! lookups. Lines that are empty or start with `#` are ignored.

use super::{SpellChecker, primary_subtag};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A dictionary for a single language backed by a plain word list
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Load a dictionary from a file path
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: &str) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_content(&content, language))
    }

    /// Build a dictionary from word-list content, one word per line
    ///
    /// # Examples
    /// ```
    /// use word_scramble::spelling::{SpellChecker, WordListDictionary};
    ///
    /// let dict = WordListDictionary::from_content("silk\nWorm\n# comment\n", "en");
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.is_valid_word("worm", "en"));
    /// assert!(!dict.is_valid_word("worm", "fr"));
    /// ```
    #[must_use]
    pub fn from_content(content: &str, language: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Self {
            language: primary_subtag(language),
            words,
        }
    }

    /// Check if a single word is in the list (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Language this list serves
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// All words of the list, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListDictionary {
    /// Every whitespace-separated part of `word` must be listed; a blank
    /// string is never valid.
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        if primary_subtag(language) != self.language {
            return false;
        }

        let mut parts = word.split_whitespace().peekable();
        if parts.peek().is_none() {
            return false;
        }

        parts.all(|part| self.contains(part))
    }
}
