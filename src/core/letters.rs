//! Letter pool arithmetic
//!
//! Decides whether one word can be spelled from the letters of another,
//! where each letter of the pool may be used at most once.

use rustc_hash::FxHashMap;

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Works on a scratch copy of the root's letters: every candidate letter, in
/// order, consumes one matching occurrence from the copy. The first letter
/// with no occurrence left fails the check.
///
/// # Examples
/// ```
/// use word_scramble::core::can_form;
///
/// assert!(can_form("listen", "silent"));
/// assert!(can_form("silkworm", "silk"));
/// assert!(!can_form("cat", "dog"));
/// assert!(!can_form("silkworm", "skills")); // only one 'l' and one 's'
/// ```
#[must_use]
pub fn can_form(root: &str, candidate: &str) -> bool {
    let mut pool: Vec<char> = root.chars().collect();

    for letter in candidate.chars() {
        match pool.iter().position(|&c| c == letter) {
            // Order of the remaining pool is irrelevant
            Some(pos) => {
                pool.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Multiset of letters with their occurrence counts
///
/// Used where many candidates are checked against the same pool, so the
/// pool is counted once instead of copied per candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of `text`
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut total = 0;
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Occurrences of `letter` (0 if absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check whether `text` is a sub-multiset of these letters
    ///
    /// Agrees with [`can_form`] for every input.
    #[must_use]
    pub fn covers(&self, text: &str) -> bool {
        let mut used: FxHashMap<char, usize> = FxHashMap::default();
        let mut length = 0;

        for ch in text.chars() {
            length += 1;
            if length > self.total {
                return false;
            }
            let seen = used.entry(ch).or_insert(0);
            *seen += 1;
            if *seen > self.get(ch) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_form_anagram() {
        assert!(can_form("listen", "silent"));
        assert!(can_form("listen", "enlist"));
    }

    #[test]
    fn can_form_subset() {
        assert!(can_form("silkworm", "silk"));
        assert!(can_form("silkworm", "worm"));
        assert!(can_form("silkworm", "milk"));
    }

    #[test]
    fn can_form_rejects_missing_letter() {
        assert!(!can_form("cat", "dog"));
        assert!(!can_form("silkworm", "silky"));
    }

    #[test]
    fn can_form_rejects_reused_letter() {
        // "silkworm" has a single 'o'
        assert!(!can_form("silkworm", "wool"));
        assert!(can_form("balloon", "loon"));
        assert!(!can_form("balloon", "lollo"));
    }

    #[test]
    fn can_form_empty_candidate() {
        assert!(can_form("cat", ""));
        assert!(!can_form("", "a"));
    }

    #[test]
    fn can_form_root_itself() {
        assert!(can_form("silkworm", "silkworm"));
        assert!(!can_form("silkworm", "silkworms"));
    }

    #[test]
    fn counts_basic() {
        let counts = LetterCounts::of("balloon");
        assert_eq!(counts.get('l'), 2);
        assert_eq!(counts.get('o'), 2);
        assert_eq!(counts.get('x'), 0);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.distinct(), 5);
    }

    #[test]
    fn counts_empty() {
        let counts = LetterCounts::of("");
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.distinct(), 0);
        assert!(counts.covers(""));
        assert!(!counts.covers("a"));
    }

    #[test]
    fn covers_agrees_with_can_form() {
        let roots = ["silkworm", "listen", "balloon", "cat", "mississippi"];
        let candidates = [
            "", "silk", "worms", "silent", "tinsel", "ball", "balls", "loon", "dog", "act",
            "miss", "sips", "pips", "ssss", "sssss", "tact",
        ];

        for root in roots {
            let counts = LetterCounts::of(root);
            for candidate in candidates {
                assert_eq!(
                    counts.covers(candidate),
                    can_form(root, candidate),
                    "disagreement for root '{root}' and candidate '{candidate}'"
                );
            }
        }
    }

    #[test]
    fn accepted_letters_never_exceed_root() {
        let root = "mississippi";
        let counts = LetterCounts::of(root);
        for candidate in ["miss", "sip", "pimps", "ississ", "spims"] {
            if can_form(root, candidate) {
                let used = LetterCounts::of(candidate);
                for ch in candidate.chars() {
                    assert!(used.get(ch) <= counts.get(ch));
                }
            }
        }
    }
}
