//! Word Scramble - CLI
//!
//! Text-mode word scramble game plus tools for checking words and exploring
//! what a root word offers.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use word_scramble::{
    commands::{check_words, find_solutions, run_play, run_survey},
    core::RootWord,
    output::{print_check_report, print_solutions, print_survey_statistics},
    session::Session,
    spelling::{AcceptAll, SpellChecker, WordListDictionary},
    validator::{DEFAULT_LANGUAGE, ValidationPolicy, WordValidator},
    wordlists::{WordListSource, start_root},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary file, one word per line (needed for --check-real, solutions and survey)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language of the dictionary
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Minimum word length
    #[arg(short, long, global = true, default_value_t = 1)]
    min_length: usize,

    /// Do not accept the root word itself
    #[arg(long, global = true)]
    reject_root: bool,

    /// Reject words missing from the dictionary
    #[arg(short = 'r', long, global = true)]
    check_real: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Submit words in order against a root word and report each outcome
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every dictionary word playable from a root word
    Solutions {
        /// The root word
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Count solutions for every start word
    Survey {
        /// Limit number of start words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::default()
            .with_min_length(self.min_length)
            .with_allow_root(!self.reject_root)
            .with_realness(self.check_real)
            .with_language(self.language.clone())
    }
}

/// Load the start-word source based on the -w flag
fn load_start_words(mode: &str) -> Result<WordListSource> {
    match mode {
        "embedded" => Ok(WordListSource::embedded()),
        path => WordListSource::from_file(path).map_err(anyhow::Error::from),
    }
}

fn load_dictionary(path: &Path, language: &str) -> Result<WordListDictionary> {
    let dictionary = WordListDictionary::from_file(path, language)
        .with_context(|| format!("Could not load dictionary {}", path.display()))?;
    info!(
        "Loaded {} '{}' dictionary words from {}",
        dictionary.len(),
        dictionary.language(),
        path.display()
    );
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = match &cli.dictionary {
        Some(path) => Some(load_dictionary(path, &cli.language)?),
        None => None,
    };

    if cli.check_real && dictionary.is_none() {
        bail!("--check-real needs a dictionary; pass one with --dictionary <PATH>");
    }

    let checker: &dyn SpellChecker = match &dictionary {
        Some(dictionary) => dictionary,
        None => &AcceptAll,
    };
    let validator = WordValidator::new(cli.policy(), checker);

    // Default to Play mode if no command given
    match cli.command.as_ref() {
        None | Some(Commands::Play) => run_play_command(&cli.start_words, validator),
        Some(Commands::Check { root, words }) => {
            let root = RootWord::new(root).with_context(|| format!("Invalid root word '{root}'"))?;
            let report = check_words(root, validator, words);
            print_check_report(&report);
            Ok(())
        }
        Some(Commands::Solutions { root, limit }) => {
            let dictionary = require_dictionary(dictionary.as_ref(), "solutions")?;
            let root = RootWord::new(root).with_context(|| format!("Invalid root word '{root}'"))?;
            let result = find_solutions(&validator, &root, dictionary);
            print_solutions(&result, *limit);
            Ok(())
        }
        Some(Commands::Survey { limit }) => {
            let dictionary = require_dictionary(dictionary.as_ref(), "survey")?;
            let source = load_start_words(&cli.start_words)?;
            println!(
                "🎯 Surveying {} start words against {} dictionary words...",
                limit.unwrap_or(source.len()).min(source.len()),
                dictionary.len()
            );
            let stats = run_survey(&validator, source.words(), dictionary, *limit, true);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn require_dictionary<'a>(
    dictionary: Option<&'a WordListDictionary>,
    command: &str,
) -> Result<&'a WordListDictionary> {
    match dictionary {
        Some(dictionary) => Ok(dictionary),
        None => bail!("'{command}' needs a dictionary; pass one with --dictionary <PATH>"),
    }
}

fn run_play_command<C: SpellChecker>(start_words: &str, validator: WordValidator<C>) -> Result<()> {
    let source = load_start_words(start_words)?;
    let root = start_root(&source)?;
    let mut session = Session::new(root, validator);
    run_play(&mut session, &source)
}
