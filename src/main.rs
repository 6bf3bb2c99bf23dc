//! Wordle Game - CLI
//!
//! Play Wordle in the terminal with words of 5 to 10 letters.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::run_play,
    config::{DEFAULT_ATTEMPT_LIMIT, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, GameConfig},
    dictionary::{
        Dictionary, UsedWords, WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    /// Word list file (first word per line); defaults to the built-in list
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Guesses allowed per round
    #[arg(short = 'a', long, default_value_t = DEFAULT_ATTEMPT_LIMIT)]
    attempts: usize,

    /// Shortest selectable word length
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Longest selectable word length
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// File recording words already played; rewritten after every round
    #[arg(short = 'u', long)]
    used_file: Option<PathBuf>,

    /// Skip words recorded in --used-file by earlier sessions
    #[arg(long, requires = "used_file")]
    avoid_used: bool,

    /// Seed for reproducible target selection
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.min_length, cli.max_length, cli.attempts)
        .context("invalid game settings")?;
    let dictionary = build_dictionary(&cli)?;

    let stats = run_play(config, dictionary)?;
    info!(
        "played {} rounds, won {}",
        stats.rounds_completed(),
        stats.rounds_won
    );
    Ok(())
}

/// Assemble the dictionary from the -w, --used-file, --avoid-used and --seed flags
fn build_dictionary(cli: &Cli) -> Result<Dictionary> {
    let words = match &cli.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };
    anyhow::ensure!(!words.is_empty(), "word list contains no usable words");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut dictionary = Dictionary::new(words, rng);

    if let Some(path) = &cli.used_file {
        if cli.avoid_used {
            dictionary = dictionary.with_used(load_used(path)?);
        }
        dictionary = dictionary.persist_used_to(path);
    }

    Ok(dictionary)
}

fn load_used(path: &Path) -> Result<UsedWords> {
    let used = UsedWords::load(path)
        .with_context(|| format!("failed to read used words from {}", path.display()))?;
    info!("avoiding {} previously used words", used.len());
    Ok(used)
}
