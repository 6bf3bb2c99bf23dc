//! Game error taxonomy

use crate::core::FeedbackError;
use std::io;
use thiserror::Error;

/// Errors raised while playing a round
///
/// The first four variants are user-facing rejections: they are shown to the
/// player and the round either continues or aborts according to its strike
/// policy. The rest are fatal and end the session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Length must be an integer between {min} and {max}, got '{input}'")]
    InvalidLengthSelection {
        input: String,
        min: usize,
        max: usize,
    },

    #[error("Guess must be {expected} letters long, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },

    #[error("'{0}' isn't in our dictionary")]
    UnknownWord(String),

    #[error("No unused {0}-letter words remain in the dictionary")]
    NoUnusedWordAvailable(usize),

    #[error("feedback engine invariant violated: {0}")]
    Engine(#[from] FeedbackError),

    #[error("operation not allowed while {0}")]
    InvalidState(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl GameError {
    /// True for errors that indicate a bug or broken I/O rather than bad player input
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Engine(_) | Self::InvalidState(_) | Self::Io(_)
        )
    }
}

/// Why a round ended without a winner or loser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Two consecutive invalid length selections
    InvalidLengthSelection,
    /// A guess of the wrong length
    InvalidGuessLength,
    /// The dictionary has no unused word of the chosen length
    NoUnusedWordAvailable,
    /// The input source was closed mid-round
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification() {
        assert!(!GameError::UnknownWord("XYZZY".into()).is_fatal());
        assert!(!GameError::NoUnusedWordAvailable(7).is_fatal());
        assert!(
            !GameError::InvalidGuessLength {
                expected: 5,
                actual: 4
            }
            .is_fatal()
        );
        assert!(
            GameError::Engine(FeedbackError::LengthMismatch {
                guess: 4,
                target: 5
            })
            .is_fatal()
        );
        assert!(GameError::InvalidState("won").is_fatal());
    }

    #[test]
    fn messages_are_readable() {
        let err = GameError::InvalidLengthSelection {
            input: "twelve".into(),
            min: 5,
            max: 10,
        };
        assert_eq!(
            err.to_string(),
            "Length must be an integer between 5 and 10, got 'twelve'"
        );
        assert_eq!(
            GameError::UnknownWord("XYZZY".into()).to_string(),
            "'XYZZY' isn't in our dictionary"
        );
    }
}
