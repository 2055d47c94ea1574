//! Word Scramble - CLI
//!
//! Spell words from the letters of a random root word, in a TUI or on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_words, run_simple},
    game::{RejectionPolicy, Session, SessionConfig},
    interactive::{App, run_tui},
    output::print_check_report,
    wordlists::{DEFAULT_LANGUAGE, StartWords, WordListDictionary},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 's', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// What a rejected word does to the game
    #[arg(short, long, global = true, value_enum, default_value_t = RejectionPolicy::Continue)]
    policy: RejectionPolicy,

    /// Language tag the dictionary is queried with
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Where the TUI writes its log while it owns the terminal
    #[arg(long, global = true, default_value = "word_scramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-by-line mode on stdin/stdout
    Simple,

    /// Check a list of words against a given root word
    Check {
        /// The root word to spell from
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Where log lines go for a command
#[derive(Debug, PartialEq, Eq)]
enum LogTarget<'a> {
    Stderr,
    /// The TUI draws over stderr, so it logs to a file instead
    File(&'a Path),
}

fn log_target<'a>(command: &Commands, log_file: &'a Path) -> LogTarget<'a> {
    match command {
        Commands::Play => LogTarget::File(log_file),
        Commands::Simple | Commands::Check { .. } => LogTarget::Stderr,
    }
}

fn init_tracing(level: &str, target: &LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        // Logs go to stderr so they never mix with game output on stdout
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file '{}'", path.display()))?;
            builder
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
    }
    Ok(())
}

/// Load the root word list based on the -s flag
fn load_start_words(mode: &str) -> Result<StartWords> {
    match mode {
        "embedded" => Ok(StartWords::embedded()),
        path => StartWords::from_file(path)
            .with_context(|| format!("cannot load start words from '{path}'")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(mode: &str, language: &str) -> Result<WordListDictionary> {
    match mode {
        "embedded" => Ok(WordListDictionary::embedded_in(language)?),
        path => WordListDictionary::from_file(path, language)
            .with_context(|| format!("cannot load dictionary from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(&cli.log_level, &log_target(&command, &cli.log_file))?;

    // Word lists are loaded up front; a missing file aborts before any game starts
    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;
    tracing::info!(
        words = dictionary.len(),
        language = dictionary.language(),
        "dictionary ready"
    );

    let config = SessionConfig::default()
        .with_policy(cli.policy)
        .with_language(cli.language.clone());

    match command {
        Commands::Play => {
            let source = load_start_words(&cli.start_words)?;
            run_tui(App::new(Session::new(source, dictionary, config)))
        }
        Commands::Simple => {
            let source = load_start_words(&cli.start_words)?;
            let mut session = Session::new(source, dictionary, config);
            run_simple(&mut session)
        }
        Commands::Check { root, words } => {
            let report = check_words(&root, &words, dictionary, config);
            print_check_report(&report);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_tui_logs_to_a_file() {
        let log_file = Path::new("game.log");
        assert_eq!(
            log_target(&Commands::Play, log_file),
            LogTarget::File(log_file)
        );
        assert_eq!(log_target(&Commands::Simple, log_file), LogTarget::Stderr);
        let check = Commands::Check {
            root: "silkworm".to_string(),
            words: vec!["silk".to_string()],
        };
        assert_eq!(log_target(&check, log_file), LogTarget::Stderr);
    }

    #[test]
    fn embedded_dictionary_refuses_other_languages() {
        assert!(load_dictionary("embedded", "en").is_ok());
        let err = load_dictionary("embedded", "en-GB").unwrap_err();
        assert!(err.to_string().contains("en-GB"));
    }

    #[test]
    fn play_is_the_default_command() {
        let cli = Cli::try_parse_from(["word_scramble"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_file, PathBuf::from("word_scramble.log"));
    }
}
