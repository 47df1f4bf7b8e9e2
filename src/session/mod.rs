//! Game session state
//!
//! A session is one root word plus the words accepted for it. Submissions
//! are evaluated one at a time; only accepted words change the state.

use crate::core::{RootWord, UsedWords};
use crate::spelling::SpellChecker;
use crate::validator::{Rejection, WordValidator};
use log::{debug, info};

/// One game: a root word and its accepted words
pub struct Session<C: SpellChecker> {
    root: RootWord,
    used: UsedWords,
    validator: WordValidator<C>,
}

impl<C: SpellChecker> Session<C> {
    /// Start a session on `root` with no accepted words
    pub fn new(root: RootWord, validator: WordValidator<C>) -> Self {
        let policy = validator.policy();
        info!(
            "New session with root word '{root}' (min length {}, root {}, realness {})",
            policy.effective_min_length(),
            if policy.allow_root { "allowed" } else { "rejected" },
            if policy.check_realness { "checked" } else { "unchecked" }
        );
        Self {
            root,
            used: UsedWords::new(),
            validator,
        }
    }

    /// Submit raw input
    ///
    /// On acceptance the normalized word is put at the front of the used
    /// words and returned.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] from the validator; the session is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    /// use word_scramble::session::Session;
    /// use word_scramble::spelling::AcceptAll;
    /// use word_scramble::validator::{Rejection, ValidationPolicy, WordValidator};
    ///
    /// let validator = WordValidator::new(ValidationPolicy::default(), AcceptAll);
    /// let mut session = Session::new(RootWord::new("silkworm").unwrap(), validator);
    ///
    /// assert_eq!(session.submit("silk"), Ok("silk"));
    /// assert_eq!(session.submit("SILK"), Err(Rejection::DuplicateWord));
    /// assert_eq!(session.used_words().len(), 1);
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<&str, Rejection> {
        let word = match self.validator.evaluate(&self.root, &self.used, raw) {
            Ok(word) => word,
            Err(rejection) => {
                if !rejection.is_silent() {
                    debug!("Rejected '{}' for '{}': {rejection}", raw.trim(), self.root);
                }
                return Err(rejection);
            }
        };

        debug!("Accepted '{word}' for '{}'", self.root);
        // The validator already refused duplicates
        let inserted = self.used.push_front(word);
        debug_assert!(inserted, "validator let a duplicate through");

        Ok(self.used.latest().unwrap_or_default())
    }

    /// Start over with a new root word, forgetting accepted words
    pub fn restart(&mut self, root: RootWord) {
        info!(
            "Restarting session: '{}' -> '{root}' after {} words",
            self.root,
            self.used.len()
        );
        self.root = root;
        self.used.clear();
    }

    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub const fn used_words(&self) -> &UsedWords {
        &self.used
    }

    /// Total letters over all accepted words
    #[must_use]
    pub fn score(&self) -> usize {
        self.used.letter_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::can_form;
    use crate::spelling::{AcceptAll, WordListDictionary};
    use crate::validator::ValidationPolicy;

    fn session(root: &str) -> Session<AcceptAll> {
        let validator = WordValidator::new(ValidationPolicy::default(), AcceptAll);
        Session::new(RootWord::new(root).unwrap(), validator)
    }

    #[test]
    fn accepted_words_prepended() {
        let mut session = session("silkworm");
        assert_eq!(session.submit("silk"), Ok("silk"));
        assert_eq!(session.submit("Worm"), Ok("worm"));

        let words: Vec<&str> = session.used_words().iter().collect();
        assert_eq!(words, ["worm", "silk"]);
    }

    #[test]
    fn root_twice_is_duplicate() {
        let mut session = session("silkworm");
        assert_eq!(session.submit("silkworm"), Ok("silkworm"));
        assert_eq!(session.submit("silkworm"), Err(Rejection::DuplicateWord));
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn empty_input_changes_nothing() {
        let mut session = session("silkworm");
        assert_eq!(session.submit("   "), Err(Rejection::EmptyInput));
        assert_eq!(session.submit(""), Err(Rejection::EmptyInput));
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn rejection_leaves_state_alone() {
        let mut session = session("cat");
        session.submit("act").unwrap();
        assert!(matches!(
            session.submit("dog"),
            Err(Rejection::Unformable { .. })
        ));
        assert_eq!(session.used_words().len(), 1);
        assert_eq!(session.root().text(), "cat");
    }

    #[test]
    fn used_words_stay_unique_and_formable() {
        let mut session = session("mississippi");
        let inputs = [
            "miss", "MISS", "sip", "sips", "sip ", "pimps", "ssss", "sssss", "ms", "ippi",
            "pi", "pi", "mississippi", "mississippis",
        ];
        for input in inputs {
            let _ = session.submit(input);
        }

        let words: Vec<&str> = session.used_words().iter().collect();
        let mut sorted = words.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), words.len());

        for word in words {
            assert!(can_form("mississippi", word), "'{word}' is not formable");
        }
    }

    #[test]
    fn restart_clears_words() {
        let mut session = session("silkworm");
        session.submit("silk").unwrap();
        session.restart(RootWord::new("listen").unwrap());

        assert_eq!(session.root().text(), "listen");
        assert!(session.used_words().is_empty());
        assert_eq!(session.submit("silent"), Ok("silent"));
    }

    #[test]
    fn score_counts_letters() {
        let mut session = session("silkworm");
        session.submit("silk").unwrap();
        session.submit("or").unwrap();
        assert_eq!(session.score(), 6);
    }

    #[test]
    fn realness_policy_in_session() {
        let dict = WordListDictionary::from_content("silk\nworm\n", "en");
        let policy = ValidationPolicy::default().with_realness(true);
        let mut session = Session::new(
            RootWord::new("silkworm").unwrap(),
            WordValidator::new(policy, dict),
        );

        assert_eq!(session.submit("worm"), Ok("worm"));
        assert_eq!(session.submit("mrow"), Err(Rejection::NotARealWord));
        assert_eq!(session.used_words().len(), 1);
    }
}
