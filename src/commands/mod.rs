//! Command implementations

pub mod check;
pub mod play;
pub mod solutions;
pub mod survey;

pub use check::{CheckOutcome, CheckReport, check_words};
pub use play::{run_play, run_play_with};
pub use solutions::{SolutionsResult, find_solutions};
pub use survey::{RootSurvey, SurveyStatistics, run_survey};
