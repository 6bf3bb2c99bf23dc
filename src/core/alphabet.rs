//! Remaining-alphabet tracking
//!
//! The set of letters not yet confirmed absent from the target. It starts full
//! at the beginning of a round and only ever shrinks.

use super::{Feedback, Word};
use std::fmt;

const FULL_MASK: u32 = (1 << 26) - 1;

/// Letters A-Z not yet ruled out, stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemainingAlphabet(u32);

impl RemainingAlphabet {
    /// All 26 letters
    #[must_use]
    pub const fn full() -> Self {
        Self(FULL_MASK)
    }

    /// Check whether `letter` (either case) is still possible
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        bit(letter).is_some_and(|b| self.0 & b != 0)
    }

    /// Number of letters remaining
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Remaining letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = char> {
        (b'A'..=b'Z')
            .filter(move |&l| self.contains(l))
            .map(char::from)
    }

    /// Remove every letter in `absent` from the set
    ///
    /// Letters outside A-Z are ignored. There is no way to put a letter back.
    pub fn eliminate(&mut self, absent: impl IntoIterator<Item = u8>) -> &mut Self {
        for letter in absent {
            if let Some(b) = bit(letter) {
                self.0 &= !b;
            }
        }
        self
    }

    /// Remove the letters of `guess` that `feedback` marked absent at every occurrence
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> &mut Self {
        self.eliminate(feedback.absent_letters(guess))
    }

    /// True when every letter in `self` is also in `other`
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }
}

impl Default for RemainingAlphabet {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for RemainingAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for letter in self.letters() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
            first = false;
        }
        Ok(())
    }
}

fn bit(letter: u8) -> Option<u32> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| 1 << (upper - b'A'))
}
