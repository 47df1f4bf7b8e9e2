//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, pluralize};
use crate::commands::{CheckReport, SolutionsResult, SurveyStatistics};
use colored::Colorize;

/// Print the outcome of each checked word
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        report.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(word) => println!(
                "  {} {} {}",
                "✓".green().bold(),
                length_badge(word.chars().count()).bright_cyan(),
                word.bright_white().bold()
            ),
            Err(rejection) if rejection.is_silent() => {
                println!("  {} {}", "·".bright_black(), "(empty, ignored)".bright_black());
            }
            Err(rejection) => println!(
                "  {} {:<12} {} {}",
                "✗".red().bold(),
                outcome.input.trim(),
                rejection.title().red(),
                rejection.message().bright_black()
            ),
        }
    }

    println!(
        "\n{} accepted, {} rejected, score {}",
        pluralize(report.accepted.len(), "word").green().bold(),
        report.visible_rejections(),
        report.score.to_string().bright_yellow().bold()
    );
}

/// Print the words found for a root, up to `limit` of them
pub fn print_solutions(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📖 {} found, {} letters in total",
        pluralize(result.count(), "word"),
        result.max_score()
    );
    if let Some(longest) = result.longest() {
        println!("   Longest: {}", longest.bright_white().bold());
    }

    let mut lengths: Vec<(&usize, &usize)> = result.by_length.iter().collect();
    lengths.sort_unstable_by(|a, b| b.0.cmp(a.0));
    let widest = lengths.iter().map(|(_, n)| **n).max().unwrap_or(0);
    if !lengths.is_empty() {
        println!("\n📈 {}", "By length:".bright_cyan().bold());
        for (len, count) in lengths {
            let bar = create_progress_bar(*count as f64, widest as f64, 30);
            println!("   {:>2}: {} {count:4}", len, bar.green());
        }
    }

    let shown = limit.unwrap_or(result.count()).min(result.count());
    if shown > 0 {
        println!("\n{}", "Words:".bright_cyan().bold());
        for word in result.words.iter().take(shown) {
            println!("  {} {word}", length_badge(word.chars().count()).bright_cyan());
        }
        if shown < result.count() {
            println!(
                "  {}",
                format!("... and {} more", result.count() - shown).bright_black()
            );
        }
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "START WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Roots surveyed:    {}", stats.total_roots);
    if stats.skipped > 0 {
        println!(
            "   Skipped:           {}",
            stats.skipped.to_string().yellow()
        );
    }
    println!(
        "   Average solutions: {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:            {}",
        stats.min_solutions.to_string().yellow()
    );
    println!(
        "   Most:              {}",
        stats.max_solutions.to_string().green()
    );
    println!(
        "   Without solutions: {}",
        if stats.barren == 0 {
            "0".green()
        } else {
            stats.barren.to_string().red()
        }
    );
    println!("   Time taken:        {:.2}s", stats.total_time.as_secs_f64());

    if !stats.richest.is_empty() {
        println!("\n🏆 {}", "Richest roots:".bright_cyan().bold());
        for entry in &stats.richest {
            println!(
                "   {:<12} {:>2} distinct {:>5} words  {:>6} letters",
                entry.root.bright_white().bold(),
                entry.distinct_letters,
                entry.solutions,
                entry.max_score
            );
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n🪨 {}", "Poorest roots:".bright_cyan().bold());
        for entry in &stats.poorest {
            println!(
                "   {:<12} {:>2} distinct {:>5} words  {:>6} letters",
                entry.root.bright_white(),
                entry.distinct_letters,
                entry.solutions,
                entry.max_score
            );
        }
    }
}
