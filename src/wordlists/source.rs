//! Root word selection
//!
//! A new game needs a root word. Sources pick one uniformly at random from a
//! fixed list and fall back to [`FALLBACK_ROOT_WORD`] when the list is empty.
//! Failing to *load* a list is fatal: there is no game without a root word.

use super::START;
use super::loader::{load_from_file, words_from_slice};
use crate::core::{RootWord, WordError};
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Root word used when a list has no usable entries
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Something that can supply a root word for a new session
pub trait RootWordSource {
    /// Pick a root word
    fn pick_root_word(&self) -> String;
}

/// Errors that prevent a session from starting
#[derive(Debug)]
pub enum StartupError {
    /// The word list file could not be read
    WordListUnavailable { path: PathBuf, source: io::Error },
    /// The picked word is not usable as a root
    InvalidRootWord { word: String, source: WordError },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordListUnavailable { path, source } => {
                write!(f, "Could not load word list {}: {source}", path.display())
            }
            Self::InvalidRootWord { word, source } => {
                write!(f, "Invalid root word '{word}': {source}")
            }
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListUnavailable { source, .. } => Some(source),
            Self::InvalidRootWord { source, .. } => Some(source),
        }
    }
}

/// Root word source backed by an in-memory word list
#[derive(Debug, Clone)]
pub struct WordListSource {
    words: Vec<String>,
}

impl WordListSource {
    /// Source over the compiled-in start words
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(START))
    }

    /// Load a source from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::WordListUnavailable`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| StartupError::WordListUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded {} start words from {}", words.len(), path.display());
        Ok(Self::from_words(words))
    }

    #[must_use]
    pub const fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick with a caller-supplied random number generator
    pub fn pick_root_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if let Some(word) = self.words.choose(rng) {
            word.clone()
        } else {
            warn!("Word list is empty, falling back to '{FALLBACK_ROOT_WORD}'");
            FALLBACK_ROOT_WORD.to_string()
        }
    }
}

impl RootWordSource for WordListSource {
    fn pick_root_word(&self) -> String {
        self.pick_root_word_with(&mut rand::rng())
    }
}

/// Pick a root word from `source` and validate it
///
/// # Errors
///
/// Returns [`StartupError::InvalidRootWord`] if the picked word cannot be a
/// root (e.g. it contains spaces or digits).
pub fn start_root<S: RootWordSource + ?Sized>(source: &S) -> Result<RootWord, StartupError> {
    let word = source.pick_root_word();
    RootWord::new(&word).map_err(|source| StartupError::InvalidRootWord { word, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FixedSource(&'static str);

    impl RootWordSource for FixedSource {
        fn pick_root_word(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn picks_from_list() {
        let source = WordListSource::from_words(vec!["alpha".to_string(), "beta".to_string()]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = source.pick_root_word_with(&mut rng);
            assert!(word == "alpha" || word == "beta");
        }
    }

    #[test]
    fn same_seed_same_word() {
        let source = WordListSource::embedded();
        let first = source.pick_root_word_with(&mut StdRng::seed_from_u64(42));
        let second = source.pick_root_word_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_list_falls_back() {
        let source = WordListSource::from_words(Vec::new());
        assert_eq!(source.pick_root_word(), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn embedded_source_is_populated() {
        let source = WordListSource::embedded();
        assert_eq!(source.len(), START.len());
        assert!(START.contains(&source.pick_root_word().as_str()));
    }

    #[test]
    fn missing_file_is_startup_error() {
        let err = WordListSource::from_file("/nonexistent/word_scramble/start.txt").unwrap_err();
        assert!(matches!(err, StartupError::WordListUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/word_scramble/start.txt"));
    }

    #[test]
    fn start_root_validates() {
        let root = start_root(&FixedSource("Listen")).unwrap();
        assert_eq!(root.text(), "listen");

        let err = start_root(&FixedSource("two words")).unwrap_err();
        assert!(matches!(
            err,
            StartupError::InvalidRootWord {
                source: WordError::InvalidCharacters,
                ..
            }
        ));
    }

    #[test]
    fn start_root_from_empty_list_uses_fallback() {
        let root = start_root(&WordListSource::from_words(Vec::new())).unwrap();
        assert_eq!(root.text(), FALLBACK_ROOT_WORD);
    }
}
