//! Solution search
//!
//! Lists every dictionary word a fresh session would accept for a root.

use crate::core::RootWord;
use crate::spelling::{SpellChecker, WordListDictionary};
use crate::validator::WordValidator;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// All acceptable words for one root
#[derive(Debug, Clone)]
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Number of words per length
    pub by_length: FxHashMap<usize, usize>,
}

impl SolutionsResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Score for finding every solution
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).sum()
    }

    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Find every word in `dictionary` that `validator` accepts for `root`
///
/// The dictionary is scanned in parallel.
pub fn find_solutions<C: SpellChecker>(
    validator: &WordValidator<C>,
    root: &RootWord,
    dictionary: &WordListDictionary,
) -> SolutionsResult {
    let pool: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = pool
        .par_iter()
        // A spellable word never has more bytes than the root
        .filter(|word| word.len() <= root.text().len())
        .filter(|&&word| validator.accepts_fresh(root, word))
        .map(|&word| word.to_string())
        .collect();

    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let mut by_length: FxHashMap<usize, usize> = FxHashMap::default();
    for word in &words {
        *by_length.entry(word.chars().count()).or_insert(0) += 1;
    }

    SolutionsResult {
        root: root.text().to_string(),
        words,
        by_length,
    }
}
