//! Round state machine
//!
//! ```text
//! AwaitingLengthChoice ──valid length──▶ AwaitingGuess ──exact match──▶ Won
//!        │                                  │    ▲
//!        │ second bad length                │    └── unknown word / miss
//!        ▼                                  ├──limit reached──▶ Lost
//!     Aborted ◀──wrong guess length─────────┘
//! ```
//!
//! A round owns its target, attempt history and remaining alphabet; all three
//! are dropped with it.

use super::error::{AbortReason, GameError};
use super::interface::{InputSource, Presenter};
use crate::config::GameConfig;
use crate::core::{Feedback, RemainingAlphabet, Word};
use crate::dictionary::DictionaryProvider;
use log::{debug, info, warn};

/// Invalid length selections tolerated before the round is abandoned
const MAX_LENGTH_STRIKES: u8 = 2;

/// Position of a round in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingLengthChoice { strikes: u8 },
    AwaitingGuess,
    Won,
    Lost,
    Aborted(AbortReason),
}

impl RoundState {
    /// True once the round can accept no further input
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Aborted(_))
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::AwaitingLengthChoice { .. } => "awaiting a length choice",
            Self::AwaitingGuess => "awaiting a guess",
            Self::Won => "the round is won",
            Self::Lost => "the round is lost",
            Self::Aborted(_) => "the round is aborted",
        }
    }
}

/// Result of a round that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Target guessed on attempt number `attempts`
    Win { attempts: usize },
    /// Attempt limit exhausted
    Loss,
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A single game round
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    state: RoundState,
    target: Option<Word>,
    history: Vec<Attempt>,
    remaining: RemainingAlphabet,
}

impl Round {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: RoundState::AwaitingLengthChoice { strikes: 0 },
            target: None,
            history: Vec::new(),
            remaining: RemainingAlphabet::full(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The target word, once a length has been chosen
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub const fn remaining(&self) -> RemainingAlphabet {
        self.remaining
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// `Win` or `Loss` once the round has been played out, `None` otherwise
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Won => Some(RoundOutcome::Win {
                attempts: self.history.len(),
            }),
            RoundState::Lost => Some(RoundOutcome::Loss),
            _ => None,
        }
    }

    /// Handle the player's word length choice
    ///
    /// On success a target is drawn from `dictionary` and the round moves to
    /// `AwaitingGuess`. An invalid choice costs a strike; the second strike aborts
    /// the round without touching the dictionary.
    ///
    /// # Errors
    /// - `InvalidLengthSelection` if `raw` is not an integer in the configured range
    /// - `NoUnusedWordAvailable` if the dictionary has no fresh word of that length
    ///   (the round is aborted)
    /// - `InvalidState` if called outside `AwaitingLengthChoice`
    pub fn choose_length<D>(&mut self, raw: &str, dictionary: &mut D) -> Result<usize, GameError>
    where
        D: DictionaryProvider + ?Sized,
    {
        let RoundState::AwaitingLengthChoice { strikes } = self.state else {
            return Err(GameError::InvalidState(self.state.describe()));
        };

        let input = raw.trim();
        let length = match input.parse::<usize>() {
            Ok(length) if self.config.length_range().contains(&length) => length,
            _ => {
                let strikes = strikes + 1;
                if strikes >= MAX_LENGTH_STRIKES {
                    warn!("round aborted after {strikes} invalid length selections");
                    self.state = RoundState::Aborted(AbortReason::InvalidLengthSelection);
                } else {
                    self.state = RoundState::AwaitingLengthChoice { strikes };
                }
                return Err(GameError::InvalidLengthSelection {
                    input: input.to_string(),
                    min: self.config.min_length(),
                    max: self.config.max_length(),
                });
            }
        };

        let Some(target) = dictionary.select_unused_word(length) else {
            warn!("round aborted: no unused {length}-letter words");
            self.state = RoundState::Aborted(AbortReason::NoUnusedWordAvailable);
            return Err(GameError::NoUnusedWordAvailable(length));
        };

        debug!("round started with a {length}-letter target");
        self.target = Some(target);
        self.history.clear();
        self.remaining = RemainingAlphabet::full();
        self.state = RoundState::AwaitingGuess;
        Ok(length)
    }

    /// Score a raw guess against the target
    ///
    /// Returns the state after the guess: `AwaitingGuess`, `Won` or `Lost`.
    ///
    /// # Errors
    /// - `InvalidGuessLength` if the guess length differs from the target's
    ///   (the round is aborted)
    /// - `UnknownWord` if the guess is not in the dictionary; no attempt is used
    /// - `InvalidState` if called outside `AwaitingGuess`
    pub fn submit_guess<D>(&mut self, raw: &str, dictionary: &D) -> Result<RoundState, GameError>
    where
        D: DictionaryProvider + ?Sized,
    {
        let (RoundState::AwaitingGuess, Some(target)) = (self.state, self.target.as_ref()) else {
            return Err(GameError::InvalidState(self.state.describe()));
        };

        let input = raw.trim();
        let actual = input.chars().count();
        if actual != target.len() {
            warn!(
                "round aborted: {actual}-letter guess for a {}-letter target",
                target.len()
            );
            self.state = RoundState::Aborted(AbortReason::InvalidGuessLength);
            return Err(GameError::InvalidGuessLength {
                expected: target.len(),
                actual,
            });
        }

        let guess = match Word::new(input) {
            Ok(word) if dictionary.is_valid_word(word.text()) => word,
            _ => return Err(GameError::UnknownWord(input.to_uppercase())),
        };

        let feedback = Feedback::evaluate(&guess, target)?;
        self.remaining.apply(&guess, &feedback);
        let solved = feedback.is_solved();
        debug!("scored {guess}: {feedback}");
        self.history.push(Attempt { guess, feedback });

        if solved {
            info!("round won in {} attempts", self.history.len());
            self.state = RoundState::Won;
        } else if self.history.len() >= self.config.attempt_limit() {
            info!("round lost after {} attempts", self.history.len());
            self.state = RoundState::Lost;
        }

        Ok(self.state)
    }

    /// Abandon a round that has not finished yet
    ///
    /// # Errors
    /// Returns `InvalidState` if the round is already terminal.
    pub fn abort(&mut self, reason: AbortReason) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::InvalidState(self.state.describe()));
        }
        warn!("round aborted: {reason:?}");
        self.state = RoundState::Aborted(reason);
        Ok(())
    }
}

/// Play one round to a terminal state
///
/// Prompts through `input`, renders every accepted guess, every rejection and
/// the final result through `presenter`, and returns the finished round.
///
/// # Errors
///
/// Returns fatal errors only: I/O failures from either collaborator or an
/// internal invariant violation. Player mistakes are rendered, not returned.
pub fn play_round<D, I, P>(
    config: GameConfig,
    dictionary: &mut D,
    input: &mut I,
    presenter: &mut P,
) -> Result<Round, GameError>
where
    D: DictionaryProvider + ?Sized,
    I: InputSource + ?Sized,
    P: Presenter + ?Sized,
{
    let mut round = Round::new(config);

    loop {
        match round.state() {
            RoundState::AwaitingLengthChoice { .. } => {
                let Some(raw) = input.prompt_length()? else {
                    round.abort(AbortReason::InputClosed)?;
                    continue;
                };
                if let Err(e) = round.choose_length(&raw, dictionary) {
                    reject(e, presenter)?;
                }
            }
            RoundState::AwaitingGuess => {
                let length = round.target().map_or(0, Word::len);
                let Some(raw) = input.prompt_guess(length)? else {
                    round.abort(AbortReason::InputClosed)?;
                    continue;
                };
                match round.submit_guess(&raw, dictionary) {
                    Ok(_) => presenter.render_attempts(round.history(), &round.remaining())?,
                    Err(e) => reject(e, presenter)?,
                }
            }
            RoundState::Won | RoundState::Lost => {
                if let (Some(outcome), Some(target)) = (round.outcome(), round.target()) {
                    presenter.render_outcome(outcome, target)?;
                }
                return Ok(round);
            }
            RoundState::Aborted(reason) => {
                presenter.render_aborted(reason)?;
                return Ok(round);
            }
        }
    }
}

fn reject<P: Presenter + ?Sized>(error: GameError, presenter: &mut P) -> Result<(), GameError> {
    if error.is_fatal() {
        return Err(error);
    }
    presenter.render_rejection(&error)?;
    Ok(())
}
