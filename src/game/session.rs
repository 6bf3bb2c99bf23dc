//! Session loop
//!
//! Plays rounds back to back until the player quits or input runs out.

use super::error::{AbortReason, GameError};
use super::interface::{InputSource, Presenter};
use super::round::{Round, RoundOutcome, RoundState, play_round};
use crate::config::GameConfig;
use crate::dictionary::DictionaryProvider;
use log::{info, warn};

/// Running totals for a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_won: usize,
    pub rounds_lost: usize,
    pub rounds_aborted: usize,
    /// `guess_distribution[n]` counts wins on attempt `n`
    pub guess_distribution: Vec<usize>,
}

impl SessionStats {
    /// Fold a finished round into the totals
    pub fn record(&mut self, round: &Round) {
        match round.outcome() {
            Some(RoundOutcome::Win { attempts }) => {
                self.rounds_won += 1;
                if self.guess_distribution.len() <= attempts {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[attempts] += 1;
            }
            Some(RoundOutcome::Loss) => self.rounds_lost += 1,
            None => self.rounds_aborted += 1,
        }
    }

    /// Rounds that ended in a win or a loss
    #[must_use]
    pub const fn rounds_completed(&self) -> usize {
        self.rounds_won + self.rounds_lost
    }

    /// Share of completed rounds that were won, in percent
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Round counts are far below 2^52
    pub fn win_rate(&self) -> f64 {
        match self.rounds_completed() {
            0 => 0.0,
            n => self.rounds_won as f64 / n as f64 * 100.0,
        }
    }
}

/// What the player asked for at the replay prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplayChoice {
    Replay,
    ResetAndReplay,
    Quit,
}

impl ReplayChoice {
    fn parse(answer: Option<&str>) -> Self {
        match answer.map(str::trim) {
            None => Self::Quit,
            Some(a) if a.eq_ignore_ascii_case("x") => Self::Quit,
            Some(a) if a.eq_ignore_ascii_case("r") => Self::ResetAndReplay,
            Some(_) => Self::Replay,
        }
    }
}

/// A play session: a dictionary, a player and a display
pub struct Session<D, I, P> {
    config: GameConfig,
    dictionary: D,
    input: I,
    presenter: P,
    stats: SessionStats,
}

impl<D, I, P> Session<D, I, P>
where
    D: DictionaryProvider,
    I: InputSource,
    P: Presenter,
{
    pub fn new(config: GameConfig, dictionary: D, input: I, presenter: P) -> Self {
        Self {
            config,
            dictionary,
            input,
            presenter,
            stats: SessionStats::default(),
        }
    }

    /// Play rounds until the player quits
    ///
    /// After each round the replay prompt decides: `X` quits, `R` clears the
    /// dictionary's used words before the next round, anything else replays.
    /// Used words are persisted after every round when the dictionary supports it.
    ///
    /// # Errors
    ///
    /// Returns fatal `GameError`s from the rounds or the replay prompt.
    pub fn run(&mut self) -> Result<&SessionStats, GameError> {
        loop {
            let round = play_round(
                self.config,
                &mut self.dictionary,
                &mut self.input,
                &mut self.presenter,
            )?;
            self.stats.record(&round);

            if let Err(e) = self.dictionary.save_used() {
                warn!("failed to save used words: {e}");
            }

            if round.state() == RoundState::Aborted(AbortReason::InputClosed) {
                break;
            }

            let answer = self.input.prompt_replay()?;
            match ReplayChoice::parse(answer.as_deref()) {
                ReplayChoice::Quit => break,
                ReplayChoice::ResetAndReplay => {
                    info!("dictionary reset by player");
                    self.dictionary.reset();
                }
                ReplayChoice::Replay => {}
            }
        }

        info!(
            "session over: {} won, {} lost, {} aborted",
            self.stats.rounds_won, self.stats.rounds_lost, self.stats.rounds_aborted
        );
        self.presenter.render_summary(&self.stats)?;
        Ok(&self.stats)
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_choice_parsing() {
        assert_eq!(ReplayChoice::parse(None), ReplayChoice::Quit);
        assert_eq!(ReplayChoice::parse(Some("X")), ReplayChoice::Quit);
        assert_eq!(ReplayChoice::parse(Some(" x \n")), ReplayChoice::Quit);
        assert_eq!(ReplayChoice::parse(Some("r")), ReplayChoice::ResetAndReplay);
        assert_eq!(ReplayChoice::parse(Some("")), ReplayChoice::Replay);
        assert_eq!(ReplayChoice::parse(Some("again")), ReplayChoice::Replay);
    }

    #[test]
    fn win_rate_ignores_aborted_rounds() {
        let stats = SessionStats {
            rounds_won: 3,
            rounds_lost: 1,
            rounds_aborted: 4,
            guess_distribution: vec![0, 0, 1, 2],
        };
        assert_eq!(stats.rounds_completed(), 4);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
        assert!(SessionStats::default().win_rate().abs() < f64::EPSILON);
    }
}
