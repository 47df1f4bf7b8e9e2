//! Reasons a submitted word is turned down

use std::fmt;

/// Why a candidate was not accepted
///
/// Every variant is recoverable: the player simply tries another word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing left after trimming; never shown to the player
    EmptyInput,
    TooShort { min: usize, len: usize },
    SameAsRoot,
    DuplicateWord,
    Unformable { root: String },
    NotARealWord,
}

impl Rejection {
    /// Whether the rejection should be dropped without telling the player
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Short headline for an alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::EmptyInput => "No word entered",
            Self::TooShort { .. } => "Word too short",
            Self::SameAsRoot => "Word is the root",
            Self::DuplicateWord => "Word used already",
            Self::Unformable { .. } => "Word not possible",
            Self::NotARealWord => "Word not recognized",
        }
    }

    /// Longer explanation to go with [`Rejection::title`]
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::EmptyInput => "Type a word first.".to_string(),
            Self::TooShort { min, len } => format!(
                "Words need at least {min} {}, that one has {len}.",
                if *min == 1 { "letter" } else { "letters" }
            ),
            Self::SameAsRoot => "You can't just repeat the root word.".to_string(),
            Self::DuplicateWord => "Be more original.".to_string(),
            Self::Unformable { root } => format!("You can't spell that word from '{root}'."),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}
