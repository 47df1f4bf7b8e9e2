//! Spell checking
//!
//! The validator only needs a yes/no answer for "is this a real word in
//! this language". Anything that can answer it implements [`SpellChecker`].

mod dictionary;

pub use dictionary::WordListDictionary;

/// Boolean oracle for dictionary membership
///
/// Implementors are shared across rayon workers during solution searches,
/// hence the `Send + Sync` bound.
pub trait SpellChecker: Send + Sync {
    /// Check whether `word` is correctly spelled in `language`
    ///
    /// `language` is a BCP 47 style tag such as `"en"` or `"en-GB"`.
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

/// Spell checker that approves every word
///
/// Stands in when realness checking is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SpellChecker for AcceptAll {
    fn is_valid_word(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }
}

/// Primary language subtag, lowercased ("en-GB" -> "en")
pub(crate) fn primary_subtag(language: &str) -> String {
    language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
