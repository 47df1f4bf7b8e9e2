//! Start-word survey
//!
//! Runs the solution search for every start word and summarizes how much
//! each root offers.

use super::solutions::find_solutions;
use crate::core::RootWord;
use crate::spelling::{SpellChecker, WordListDictionary};
use crate::validator::WordValidator;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::time::{Duration, Instant};

/// How many entries the best/worst lists keep
const RANKING_SIZE: usize = 5;

/// Solution count for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSurvey {
    pub root: String,
    /// Distinct letters in the root
    pub distinct_letters: usize,
    pub solutions: usize,
    pub max_score: usize,
}

/// Statistics over all surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Entries skipped because they are not valid roots
    pub skipped: usize,
    /// Roots without a single solution
    pub barren: usize,
    pub average_solutions: f64,
    pub min_solutions: usize,
    pub max_solutions: usize,
    /// Most solutions first
    pub richest: Vec<RootSurvey>,
    /// Fewest solutions first
    pub poorest: Vec<RootSurvey>,
    pub total_time: Duration,
}

/// Survey `roots` (or the first `limit` of them) against `dictionary`
///
/// Pass `show_progress = false` to suppress the progress bar.
pub fn run_survey<C: SpellChecker>(
    validator: &WordValidator<C>,
    roots: &[String],
    dictionary: &WordListDictionary,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics {
    let selected = &roots[..limit.unwrap_or(roots.len()).min(roots.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(selected.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut results: Vec<RootSurvey> = Vec::with_capacity(selected.len());
    let mut skipped = 0;

    for text in selected {
        match RootWord::new(text) {
            Ok(root) => {
                let found = find_solutions(validator, &root, dictionary);
                pb.set_message(format!("{}: {}", root.text(), found.count()));
                results.push(RootSurvey {
                    root: found.root.clone(),
                    distinct_letters: root.counts().distinct(),
                    solutions: found.count(),
                    max_score: found.max_score(),
                });
            }
            Err(e) => {
                warn!("Skipping start word '{text}': {e}");
                skipped += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(results, skipped, start.elapsed())
}

fn summarize(mut results: Vec<RootSurvey>, skipped: usize, total_time: Duration) -> SurveyStatistics {
    let total_roots = results.len();
    let total_solutions: usize = results.iter().map(|r| r.solutions).sum();
    let barren = results.iter().filter(|r| r.solutions == 0).count();

    results.sort_by(|a, b| b.solutions.cmp(&a.solutions).then_with(|| a.root.cmp(&b.root)));

    let richest: Vec<RootSurvey> = results.iter().take(RANKING_SIZE).cloned().collect();
    let poorest: Vec<RootSurvey> = results.iter().rev().take(RANKING_SIZE).cloned().collect();

    SurveyStatistics {
        total_roots,
        skipped,
        barren,
        average_solutions: if total_roots == 0 {
            0.0
        } else {
            total_solutions as f64 / total_roots as f64
        },
        min_solutions: results.last().map_or(0, |r| r.solutions),
        max_solutions: results.first().map_or(0, |r| r.solutions),
        richest,
        poorest,
        total_time,
    }
}
