//! Core domain types for the word scramble game
//!
//! Pure types with no I/O: the root word, normalized candidates, the list of
//! accepted words, and the letter-pool arithmetic that decides constructibility.

mod candidate;
mod letters;
mod used;
mod word;

pub use candidate::Candidate;
pub use letters::{LetterCounts, can_form};
pub use used::UsedWords;
pub use word::{RootWord, WordError};
