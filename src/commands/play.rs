//! Text-mode play loop
//!
//! Prompts for words, shows each accepted word with its letter count, and
//! reports rejections. Lines starting with ':' are commands.

use crate::output::formatters::length_badge;
use crate::session::Session;
use crate::spelling::SpellChecker;
use crate::wordlists::{RootWordSource, start_root};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// In-game commands, entered with a leading ':'
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Words,
    Help,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.strip_prefix(':')?.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Self::Quit),
            "n" | "new" => Some(Self::New),
            "w" | "words" => Some(Self::Words),
            "h" | "help" | "?" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Run the play loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// root word cannot be picked.
pub fn run_play<C, S>(session: &mut Session<C>, source: &S) -> Result<()>
where
    C: SpellChecker,
    S: RootWordSource + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_with(session, source, stdin.lock(), stdout.lock())
}

/// Run the play loop on arbitrary input and output
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// root word cannot be picked.
pub fn run_play_with<C, S, R, W>(
    session: &mut Session<C>,
    source: &S,
    mut input: R,
    mut out: W,
) -> Result<()>
where
    C: SpellChecker,
    S: RootWordSource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many words as you can from the letters of the root word.")?;
    writeln!(out, "Each letter can be used once per word, and no word twice.\n")?;
    writeln!(out, "Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit, ':help' for help\n")?;

    print_root(&mut out, session)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        // Undecodable bytes become U+FFFD and fail like any other bad letter
        let line = String::from_utf8_lossy(&buf);
        let entry = line.trim();

        if let Some(command) = Command::parse(entry) {
            match command {
                Command::Quit => break,
                Command::New => {
                    let root = start_root(source)?;
                    session.restart(root);
                    writeln!(out, "\n🔄 New game started!\n")?;
                    print_root(&mut out, session)?;
                }
                Command::Words => print_words(&mut out, session)?,
                Command::Help => {
                    writeln!(out, "  :new    pick a new root word")?;
                    writeln!(out, "  :words  list accepted words")?;
                    writeln!(out, "  :quit   leave the game\n")?;
                }
            }
            continue;
        }

        match session.submit(entry) {
            Ok(word) => {
                let badge = length_badge(word.chars().count());
                writeln!(out, "  {} {}", badge.bright_cyan(), word.bright_white().bold())?;
            }
            Err(rejection) if rejection.is_silent() => {}
            Err(rejection) => {
                writeln!(
                    out,
                    "  ❌ {} {}",
                    rejection.title().red().bold(),
                    rejection.message()
                )?;
            }
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! {} words, {} letters.\n",
        session.used_words().len(),
        session.score()
    )?;
    Ok(())
}

fn print_root<C: SpellChecker, W: Write>(out: &mut W, session: &Session<C>) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        session.root().text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}\n", "─".repeat(60).cyan())
}

fn print_words<C: SpellChecker, W: Write>(out: &mut W, session: &Session<C>) -> io::Result<()> {
    let used = session.used_words();
    if used.is_empty() {
        return writeln!(out, "  No words yet.\n");
    }

    for word in used.iter() {
        writeln!(out, "  {} {word}", length_badge(word.chars().count()))?;
    }
    writeln!(out, "  Score: {}\n", session.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::spelling::AcceptAll;
    use crate::validator::{ValidationPolicy, WordValidator};
    use crate::wordlists::WordListSource;

    fn play(root: &str, next_root: &str, script: &str) -> (Session<AcceptAll>, String) {
        play_bytes(root, next_root, script.as_bytes())
    }

    fn play_bytes(root: &str, next_root: &str, script: &[u8]) -> (Session<AcceptAll>, String) {
        let validator = WordValidator::new(ValidationPolicy::default(), AcceptAll);
        let mut session = Session::new(RootWord::new(root).unwrap(), validator);
        let source = WordListSource::from_words(vec![next_root.to_string()]);

        let mut out = Vec::new();
        run_play_with(&mut session, &source, script, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse(":quit"), Some(Command::Quit));
        assert_eq!(Command::parse(":q"), Some(Command::Quit));
        assert_eq!(Command::parse(":new"), Some(Command::New));
        assert_eq!(Command::parse(":words"), Some(Command::Words));
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse(":bogus"), None);
    }

    #[test]
    fn commands_ignore_case() {
        assert_eq!(Command::parse(":QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse(":New"), Some(Command::New));
        assert_eq!(Command::parse(":Words"), Some(Command::Words));
        assert_eq!(Command::parse(":H"), Some(Command::Help));
    }

    #[test]
    fn uppercase_quit_ends_game() {
        let (session, output) = play("silkworm", "listen", "silk\n:QUIT\nworm\n");

        let words: Vec<&str> = session.used_words().iter().collect();
        assert_eq!(words, ["silk"]);
        assert!(!output.contains("Word not possible"));
    }

    #[test]
    fn invalid_utf8_line_is_rejected_and_play_continues() {
        let (session, output) = play_bytes("silkworm", "listen", b"silk\n\xff\xfe\nworm\n:quit\n");

        let words: Vec<&str> = session.used_words().iter().collect();
        assert_eq!(words, ["worm", "silk"]);
        assert!(output.contains("Word not possible"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn banner_mentions_help() {
        let (_, output) = play("cat", "dog", ":quit\n");
        assert!(output.contains("':help'"));
    }

    #[test]
    fn accepts_and_rejects_words() {
        let (session, output) = play("silkworm", "listen", "silk\nsilk\nzebra\n:quit\n");

        let words: Vec<&str> = session.used_words().iter().collect();
        assert_eq!(words, ["silk"]);
        assert!(output.contains("SILKWORM"));
        assert!(output.contains("Word used already"));
        assert!(output.contains("Word not possible"));
    }

    #[test]
    fn empty_lines_are_ignored() {
        let (session, output) = play("silkworm", "listen", "\n   \nworm\n");

        assert_eq!(session.used_words().len(), 1);
        assert!(!output.contains("No word entered"));
    }

    #[test]
    fn new_command_restarts_with_source_word() {
        let (session, output) = play("silkworm", "listen", "silk\n:new\nsilent\n:quit\n");

        assert_eq!(session.root().text(), "listen");
        let words: Vec<&str> = session.used_words().iter().collect();
        assert_eq!(words, ["silent"]);
        assert!(output.contains("New game started"));
    }

    #[test]
    fn words_command_lists_most_recent_first() {
        let (_, output) = play("silkworm", "listen", "silk\nworm\n:words\n");

        let worm = output.rfind("worm\n").unwrap();
        let silk = output.rfind("silk\n").unwrap();
        assert!(worm < silk, "expected 'worm' listed before 'silk'");
        assert!(output.contains("Score: 8"));
    }

    #[test]
    fn ends_at_end_of_input() {
        let (_, output) = play("cat", "dog", "act\n");
        assert!(output.contains("Thanks for playing"));
    }
}
