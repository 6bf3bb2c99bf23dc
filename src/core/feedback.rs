//! Guess feedback evaluation
//!
//! Feedback assigns one of three tags to every letter of a guess:
//! - `Correct` (green): letter matches the target at this position
//! - `Present` (yellow): letter occurs elsewhere in the target
//! - `Absent` (gray): letter does not occur, or all its occurrences are already claimed
//!
//! For every letter, the number of `Correct` + `Present` tags in one guess never
//! exceeds the number of times that letter occurs in the target.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Green
    Correct,
    /// Yellow
    Present,
    /// Gray
    Absent,
}

impl LetterFeedback {
    /// Emoji square for this tag
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Raised when a guess and target of different lengths are compared
///
/// Guesses are length-checked before scoring, so this indicates a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// Per-letter feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Count the letters of the target
    /// 2. First pass: mark exact position matches `Correct` and consume their counts
    /// 3. Second pass, left to right: remaining positions take `Present` while the
    ///    letter still has unclaimed occurrences, `Absent` otherwise
    ///
    /// Exact matches take priority over misplaced ones, and among misplaced
    /// duplicates the leftmost occurrence wins.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let target = Word::new("allow").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.as_slice(), &[Present, Present, Correct, Absent, Absent]);
    /// ```
    pub fn evaluate(guess: &Word, target: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != target.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        let mut result = vec![LetterFeedback::Absent; guess.len()];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, (g, t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = LetterFeedback::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (slot, letter) in result.iter_mut().zip(guess.letters()) {
            if *slot == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *slot = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// The tags in guess order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Number of tagged letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count the tags equal to `kind`
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Letters of `guess` whose every occurrence was tagged `Absent`
    ///
    /// A letter that is `Correct` or `Present` anywhere in the guess is kept out,
    /// even if another occurrence of it came back `Absent`.
    #[must_use]
    pub fn absent_letters(&self, guess: &Word) -> Vec<u8> {
        let mut absent: Vec<u8> = Vec::new();
        for &letter in guess.letters() {
            if absent.contains(&letter) {
                continue;
            }
            let all_absent = guess
                .letters()
                .iter()
                .zip(&self.0)
                .filter(|(l, _)| **l == letter)
                .all(|(_, f)| *f == LetterFeedback::Absent);
            if all_absent {
                absent.push(letter);
            }
        }
        absent
    }

    /// Render as a string of emoji squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent as A, Correct as C, Present as P};
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn feedback_fixture_table() {
        let cases: &[(&str, &str, &[LetterFeedback])] = &[
            ("ALLOW", "LOLLY", &[P, P, C, A, A]),
            ("APPLE", "PAPER", &[P, P, C, P, A]),
            ("ROBOT", "BOOTS", &[P, C, P, P, A]),
            ("ERASE", "SPEED", &[P, A, P, P, A]),
            ("FLOOR", "ROBOT", &[P, P, A, C, A]),
            ("ABIDE", "SPEED", &[A, A, P, A, P]),
            ("BANANA", "AAAAAA", &[A, C, A, C, A, C]),
            ("BANANA", "ANANAS", &[P, P, P, P, P, A]),
            ("SLATE", "CRANE", &[A, A, C, A, C]),
        ];

        for (target, guess, expected) in cases {
            assert_eq!(
                eval(guess, target).as_slice(),
                *expected,
                "guess {guess} against target {target}"
            );
        }
    }

    #[test]
    fn feedback_identical_words_all_correct() {
        for word in ["crane", "banana", "dictionary", "aaaaa"] {
            let feedback = eval(word, word);
            assert!(feedback.is_solved());
            assert_eq!(feedback.count(C), word.len());
        }
    }

    #[test]
    fn feedback_long_repeated_letters() {
        let word = "z".repeat(300);
        assert!(eval(&word, &word).is_solved());
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.count(A), 5);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn feedback_length_mismatch() {
        let result = Feedback::evaluate(&Word::new("crane").unwrap(), &Word::new("cranes").unwrap());
        assert_eq!(
            result,
            Err(FeedbackError::LengthMismatch {
                guess: 5,
                target: 6
            })
        );
    }

    #[test]
    fn feedback_is_deterministic() {
        let first = eval("lolly", "allow");
        for _ in 0..10 {
            assert_eq!(eval("lolly", "allow"), first);
        }
    }

    #[test]
    fn feedback_never_overclaims_letters() {
        let words = [
            "allow", "lolly", "apple", "paper", "robot", "boots", "erase", "speed", "floor",
            "llama", "level", "eerie", "geese",
        ];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let feedback = Feedback::evaluate(&g, &t).unwrap();
                assert_eq!(feedback.len(), g.len());

                for &letter in g.letters() {
                    let claimed = g
                        .letters()
                        .iter()
                        .zip(feedback.as_slice())
                        .filter(|(l, f)| **l == letter && **f != A)
                        .count();
                    let available = t.letters().iter().filter(|&&l| l == letter).count();
                    assert!(claimed <= available, "{guess} vs {target}: letter {letter}");
                }
            }
        }
    }

    #[test]
    fn absent_letters_require_every_occurrence_absent() {
        let guess = Word::new("speed").unwrap();
        let feedback = eval("speed", "abide");
        // E is Present once and Absent once, D is Present
        assert_eq!(feedback.absent_letters(&guess), vec![b'S', b'P']);
    }

    #[test]
    fn absent_letters_keeps_correct_duplicates() {
        let guess = Word::new("aaaaaa").unwrap();
        let feedback = eval("aaaaaa", "banana");
        assert!(feedback.absent_letters(&guess).is_empty());
    }

    #[test]
    fn feedback_emoji() {
        assert_eq!(eval("crane", "slate").to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(format!("{}", eval("slate", "slate")), "🟩🟩🟩🟩🟩");
    }
}
