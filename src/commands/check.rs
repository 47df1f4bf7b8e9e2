//! One-shot word checking
//!
//! Feeds a list of words, in order, through a fresh session and records
//! what happened to each.

use crate::core::RootWord;
use crate::session::Session;
use crate::spelling::SpellChecker;
use crate::validator::{Rejection, WordValidator};

/// Outcome for a single submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub input: String,
    pub result: Result<String, Rejection>,
}

/// Result of checking a list of words against one root
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub root: String,
    pub outcomes: Vec<CheckOutcome>,
    /// Accepted words, most recent first
    pub accepted: Vec<String>,
    pub score: usize,
}

impl CheckReport {
    /// Number of rejections the player would have seen
    #[must_use]
    pub fn visible_rejections(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Err(r) if !r.is_silent()))
            .count()
    }
}

/// Submit `words` one after another to a new session on `root`
pub fn check_words<C: SpellChecker>(
    root: RootWord,
    validator: WordValidator<C>,
    words: &[String],
) -> CheckReport {
    let mut session = Session::new(root, validator);

    let outcomes = words
        .iter()
        .map(|input| CheckOutcome {
            input: input.clone(),
            result: session.submit(input).map(str::to_string),
        })
        .collect();

    CheckReport {
        root: session.root().text().to_string(),
        outcomes,
        accepted: session.used_words().as_slice().to_vec(),
        score: session.score(),
    }
}
