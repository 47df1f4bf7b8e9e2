//! Tunable acceptance rules

/// Language tag used for dictionary lookups unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "en";

/// Which optional checks the validator applies
///
/// The default accepts any unused, formable word of one letter or more,
/// including the root itself, without consulting a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Minimum candidate length in characters (values below 1 act as 1)
    pub min_length: usize,
    /// Whether the root word itself is an acceptable answer
    pub allow_root: bool,
    /// Whether candidates must pass the spell checker
    pub check_realness: bool,
    /// Language passed to the spell checker
    pub language: String,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_length: 1,
            allow_root: true,
            check_realness: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ValidationPolicy {
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_allow_root(mut self, allow_root: bool) -> Self {
        self.allow_root = allow_root;
        self
    }

    #[must_use]
    pub fn with_realness(mut self, check_realness: bool) -> Self {
        self.check_realness = check_realness;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Minimum length actually enforced
    #[inline]
    #[must_use]
    pub const fn effective_min_length(&self) -> usize {
        if self.min_length == 0 { 1 } else { self.min_length }
    }
}
