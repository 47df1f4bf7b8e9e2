//! Formatting utilities for terminal output

/// Format a word length as a circled numeral (①..⑳), or "(n)" past 20
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => {
            // U+2460 is CIRCLED DIGIT ONE; the next 19 code points follow in order
            let code = 0x2460 + (len as u32 - 1);
            char::from_u32(code).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 word", "2 words"
#[must_use]
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}
