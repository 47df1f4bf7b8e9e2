//! Word Scramble
//!
//! A word-building game: make as many words as you can from the letters of a
//! root word, using each letter at most once per word and no word twice.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RootWord;
//! use word_scramble::session::Session;
//! use word_scramble::spelling::AcceptAll;
//! use word_scramble::validator::{Rejection, ValidationPolicy, WordValidator};
//!
//! let validator = WordValidator::new(ValidationPolicy::default(), AcceptAll);
//! let mut session = Session::new(RootWord::new("listen").unwrap(), validator);
//!
//! assert_eq!(session.submit("Silent"), Ok("silent"));
//! assert!(matches!(session.submit("stolen"), Err(Rejection::Unformable { .. })));
//! ```

// Core domain types
pub mod core;

// Acceptance rules
pub mod validator;

// Dictionary lookups
pub mod spelling;

// Per-game state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
