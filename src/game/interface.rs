//! Collaborator traits for the game loop
//!
//! The round and session only talk to the player through these two traits, so
//! the console front end and the test harnesses are interchangeable.

use super::error::{AbortReason, GameError};
use super::round::{Attempt, RoundOutcome};
use super::session::SessionStats;
use crate::core::{RemainingAlphabet, Word};
use std::io;

/// Source of raw, untrusted player input
///
/// Every method returns `Ok(None)` once input is exhausted.
pub trait InputSource {
    /// Ask for the word length of the next round
    fn prompt_length(&mut self) -> io::Result<Option<String>>;

    /// Ask for a guess of `length` letters
    fn prompt_guess(&mut self, length: usize) -> io::Result<Option<String>>;

    /// Ask whether to play another round
    fn prompt_replay(&mut self) -> io::Result<Option<String>>;
}

/// Renders game state for the player
pub trait Presenter {
    /// Show every attempt so far and the letters not yet ruled out
    fn render_attempts(
        &mut self,
        history: &[Attempt],
        remaining: &RemainingAlphabet,
    ) -> io::Result<()>;

    /// Announce a finished round
    fn render_outcome(&mut self, outcome: RoundOutcome, target: &Word) -> io::Result<()>;

    /// Explain why the last input was rejected
    fn render_rejection(&mut self, error: &GameError) -> io::Result<()>;

    /// Explain why the round was abandoned
    fn render_aborted(&mut self, reason: AbortReason) -> io::Result<()>;

    /// Show the totals for the whole session
    fn render_summary(&mut self, stats: &SessionStats) -> io::Result<()>;
}
