//! Word validation
//!
//! Decides whether a submitted word is acceptable for a root word given the
//! words accepted so far. Checks run in a fixed order and stop at the first
//! failure:
//!
//! 1. non-empty after normalization (silent rejection)
//! 2. minimum length, then not the root itself (both per [`ValidationPolicy`])
//! 3. not already used
//! 4. spellable from the root's letters
//! 5. a real word, when the policy asks for it

mod policy;
mod rejection;

pub use policy::{DEFAULT_LANGUAGE, ValidationPolicy};
pub use rejection::Rejection;

use crate::core::{Candidate, RootWord, UsedWords, can_form};
use crate::spelling::SpellChecker;

/// Check that `word` has not been accepted before
#[inline]
#[must_use]
pub fn is_original(used: &UsedWords, word: &str) -> bool {
    !used.contains(word)
}

/// Check that `word` can be spelled from the root's letters
#[inline]
#[must_use]
pub fn is_possible(root: &RootWord, word: &str) -> bool {
    can_form(root.text(), word)
}

/// Ask the spell checker whether `word` is real in `language`
#[inline]
#[must_use]
pub fn is_real<C: SpellChecker + ?Sized>(checker: &C, word: &str, language: &str) -> bool {
    checker.is_valid_word(word, language)
}

/// Applies a [`ValidationPolicy`] using a spell checker
///
/// Holds no session state; the root and used words are passed per call.
pub struct WordValidator<C: SpellChecker> {
    policy: ValidationPolicy,
    checker: C,
}

impl<C: SpellChecker> WordValidator<C> {
    pub const fn new(policy: ValidationPolicy, checker: C) -> Self {
        Self { policy, checker }
    }

    #[must_use]
    pub const fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Evaluate raw input against `root` and `used`
    ///
    /// Returns the normalized word on acceptance. Nothing is mutated either
    /// way; recording the word is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] hit, in check order.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, UsedWords};
    /// use word_scramble::spelling::AcceptAll;
    /// use word_scramble::validator::{Rejection, ValidationPolicy, WordValidator};
    ///
    /// let validator = WordValidator::new(ValidationPolicy::default(), AcceptAll);
    /// let root = RootWord::new("silkworm").unwrap();
    /// let used = UsedWords::new();
    ///
    /// assert_eq!(validator.evaluate(&root, &used, " Silk "), Ok("silk".to_string()));
    /// assert_eq!(validator.evaluate(&root, &used, "   "), Err(Rejection::EmptyInput));
    /// ```
    pub fn evaluate(
        &self,
        root: &RootWord,
        used: &UsedWords,
        raw: &str,
    ) -> Result<String, Rejection> {
        let candidate = Candidate::new(raw);
        self.evaluate_candidate(root, used, &candidate)?;
        Ok(candidate.into_text())
    }

    /// Run every check on an already normalized candidate
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] hit, in check order.
    pub fn evaluate_candidate(
        &self,
        root: &RootWord,
        used: &UsedWords,
        candidate: &Candidate,
    ) -> Result<(), Rejection> {
        if candidate.is_empty() {
            return Err(Rejection::EmptyInput);
        }

        self.check_shape(root, candidate)?;

        let word = candidate.text();

        if !is_original(used, word) {
            return Err(Rejection::DuplicateWord);
        }

        if !is_possible(root, word) {
            return Err(Rejection::Unformable {
                root: root.text().to_string(),
            });
        }

        if self.policy.check_realness && !is_real(&self.checker, word, &self.policy.language) {
            return Err(Rejection::NotARealWord);
        }

        Ok(())
    }

    /// Length and root-repeat rules, which need no session history
    fn check_shape(&self, root: &RootWord, candidate: &Candidate) -> Result<(), Rejection> {
        let min = self.policy.effective_min_length();
        let len = candidate.len();
        if len < min {
            return Err(Rejection::TooShort { min, len });
        }

        if !self.policy.allow_root && candidate.text() == root.text() {
            return Err(Rejection::SameAsRoot);
        }

        Ok(())
    }

    /// Whether `word` would be accepted as the first word of a session
    ///
    /// Skips the originality check. Used by solution searches.
    #[must_use]
    pub fn accepts_fresh(&self, root: &RootWord, word: &str) -> bool {
        let candidate = Candidate::new(word);
        if candidate.is_empty() || self.check_shape(root, &candidate).is_err() {
            return false;
        }

        root.counts().covers(candidate.text())
            && (!self.policy.check_realness
                || is_real(&self.checker, candidate.text(), &self.policy.language))
    }
}
