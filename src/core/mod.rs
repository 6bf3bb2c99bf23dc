//! Core domain types for the game
//!
//! Pure, deterministic building blocks: words, guess feedback and the
//! remaining-alphabet tracker. Nothing here performs I/O.

mod alphabet;
mod feedback;
mod word;

pub use alphabet::RemainingAlphabet;
pub use feedback::{Feedback, FeedbackError, LetterFeedback};
pub use word::{Word, WordError};
