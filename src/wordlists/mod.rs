//! Word lists for starting games
//!
//! Provides the embedded start-word list and the random root-word source
//! built on top of it.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{START, START_COUNT};
pub use source::{FALLBACK_ROOT_WORD, RootWordSource, StartupError, WordListSource, start_root};
