//! Interactive console play
//!
//! Line-based input over any `BufRead`, wired to the console presenter.

use crate::config::GameConfig;
use crate::dictionary::DictionaryProvider;
use crate::game::{GameError, InputSource, Session, SessionStats};
use crate::output::ConsolePresenter;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Input source that prompts on a writer and reads lines from a reader
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
    min_length: usize,
    max_length: usize,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompts: W, config: &GameConfig) -> Self {
        Self {
            reader,
            prompts,
            min_length: config.min_length(),
            max_length: config.max_length(),
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompts, "\n{} ", prompt.bold())?;
        self.prompts.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input, not a broken terminal
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn prompt_length(&mut self) -> io::Result<Option<String>> {
        let prompt = format!(
            "Choose a word length between {} and {}:",
            self.min_length, self.max_length
        );
        self.ask(&prompt)
    }

    fn prompt_guess(&mut self, length: usize) -> io::Result<Option<String>> {
        self.ask(&format!("Guess a {length}-letter word:"))
    }

    fn prompt_replay(&mut self) -> io::Result<Option<String>> {
        self.ask("Hit enter to play again, R to reset used words, X to quit:")
    }
}

/// Run an interactive session on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error on the terminal or the game hits an
/// internal invariant violation.
pub fn run_play<D: DictionaryProvider>(
    config: GameConfig,
    dictionary: D,
) -> Result<SessionStats, GameError> {
    print_banner(&config);

    let stdin = io::stdin();
    let input = ConsoleInput::new(stdin.lock(), io::stdout(), &config);
    let mut session = Session::new(config, dictionary, input, ConsolePresenter::stdout());
    let stats = session.run()?.clone();
    Ok(stats)
}

fn print_banner(config: &GameConfig) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        W O R D L E                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the hidden word in {} tries. After each guess:",
        config.attempt_limit()
    );
    println!("  {} letter is in the right spot", "green ".green().bold());
    println!("  {} letter is in the word, wrong spot", "yellow".yellow().bold());
    println!("  {} letter is not in the word", "gray  ".bright_black());
}
