//! Wordle Game
//!
//! A Wordle-style word guessing game with word lengths of 5 to 10 letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterFeedback, RemainingAlphabet, Word};
//!
//! let guess = Word::new("paper").unwrap();
//! let target = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target).unwrap();
//! assert_eq!(feedback.count(LetterFeedback::Correct), 1);
//!
//! let mut remaining = RemainingAlphabet::full();
//! remaining.apply(&guess, &feedback);
//! assert!(!remaining.contains(b'R'));
//! ```

// Core domain types
pub mod core;

// Game settings
pub mod config;

// Target selection and guess validation
pub mod dictionary;

// Round state machine and session loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
