//! Dictionary provider
//!
//! Supplies target words and validates guesses. Selecting a target and marking
//! it used happen in one call, so no two rounds can be handed the same word.

mod embedded;
pub mod loader;
mod usage;

pub use embedded::{WORDS, WORDS_COUNT};
pub use usage::UsedWords;

use crate::core::Word;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Source of target words and judge of guess validity
pub trait DictionaryProvider {
    /// Pick an unused word of `length` letters and mark it used
    ///
    /// Returns `None` when every word of that length has been used (or none exist).
    fn select_unused_word(&mut self, length: usize) -> Option<Word>;

    /// Check whether `candidate` is a known word, ignoring case
    fn is_valid_word(&self, candidate: &str) -> bool;

    /// Forget all used-word marks
    fn reset(&mut self);

    /// Mark `word` as used without selecting it
    fn mark_used(&mut self, word: &Word);

    /// Persist used-word marks, if this provider keeps them anywhere
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the marks cannot be written.
    fn save_used(&self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory dictionary with per-session used-word tracking
pub struct Dictionary {
    known: FxHashSet<Word>,
    by_length: FxHashMap<usize, Vec<Word>>,
    used: UsedWords,
    used_path: Option<PathBuf>,
    rng: StdRng,
}

impl Dictionary {
    /// Build a dictionary from `words`, deduplicating them
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>, rng: StdRng) -> Self {
        let mut known = FxHashSet::default();
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();

        for word in words {
            if known.insert(word.clone()) {
                by_length.entry(word.len()).or_default().push(word);
            }
        }

        debug!(
            "dictionary loaded: {} words across {} lengths",
            known.len(),
            by_length.len()
        );

        Self {
            known,
            by_length,
            used: UsedWords::new(),
            used_path: None,
            rng,
        }
    }

    /// Build with a fixed seed, for reproducible target selection
    #[must_use]
    pub fn with_seed(words: impl IntoIterator<Item = Word>, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }

    /// Replace the used-word set, e.g. with one loaded from a previous session
    #[must_use]
    pub fn with_used(mut self, used: UsedWords) -> Self {
        self.used = used;
        self
    }

    /// Save used words to `path` whenever `save_used` is called
    #[must_use]
    pub fn persist_used_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.used_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn used(&self) -> &UsedWords {
        &self.used
    }

    /// Total number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Number of words of `length` letters not yet used
    #[must_use]
    pub fn unused_count(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, |words| {
            words.iter().filter(|w| !self.used.contains(w)).count()
        })
    }
}

impl DictionaryProvider for Dictionary {
    fn select_unused_word(&mut self, length: usize) -> Option<Word> {
        let candidates: Vec<&Word> = self
            .by_length
            .get(&length)?
            .iter()
            .filter(|w| !self.used.contains(w))
            .collect();

        let chosen = (*candidates.choose(&mut self.rng)?).clone();
        self.used.insert(chosen.clone());
        debug!(
            "selected a {length}-letter target, {} unused remain",
            candidates.len() - 1
        );
        Some(chosen)
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        Word::new(candidate).is_ok_and(|w| self.known.contains(&w))
    }

    fn reset(&mut self) {
        debug!("clearing {} used words", self.used.len());
        self.used.clear();
    }

    fn mark_used(&mut self, word: &Word) {
        self.used.insert(word.clone());
    }

    fn save_used(&self) -> io::Result<()> {
        match &self.used_path {
            Some(path) => self.used.save(path),
            None => Ok(()),
        }
    }
}

/// Cloneable, thread-safe handle to a `Dictionary`
///
/// Every operation holds the lock for its whole duration, so selection and
/// marking stay a single step even when rounds run on several threads.
#[derive(Clone)]
pub struct SharedDictionary(Arc<Mutex<Dictionary>>);

impl SharedDictionary {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self(Arc::new(Mutex::new(dictionary)))
    }

    /// Lock the underlying dictionary
    ///
    /// A poisoned lock is recovered; dictionary state is never left half-updated.
    pub fn lock(&self) -> MutexGuard<'_, Dictionary> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DictionaryProvider for SharedDictionary {
    fn select_unused_word(&mut self, length: usize) -> Option<Word> {
        self.lock().select_unused_word(length)
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.lock().is_valid_word(candidate)
    }

    fn reset(&mut self) {
        self.lock().reset();
    }

    fn mark_used(&mut self, word: &Word) {
        self.lock().mark_used(word);
    }

    fn save_used(&self) -> io::Result<()> {
        self.lock().save_used()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::with_seed(loader::words_from_slice(words), 7)
    }

    #[test]
    fn select_returns_word_of_requested_length() {
        let mut dict = dictionary(&["crane", "slate", "banana", "dictionary"]);

        let word = dict.select_unused_word(6).unwrap();
        assert_eq!(word.text(), "BANANA");
        assert!(dict.used().contains(&word));
    }

    #[test]
    fn select_never_repeats_until_reset() {
        let mut dict = dictionary(&["crane", "slate", "irate", "banana"]);

        let mut picked: Vec<Word> = (0..3)
            .map(|_| dict.select_unused_word(5).unwrap())
            .collect();
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 3);
        assert_eq!(dict.unused_count(5), 0);
        assert_eq!(dict.select_unused_word(5), None);

        dict.reset();
        assert_eq!(dict.unused_count(5), 3);
        assert!(dict.select_unused_word(5).is_some());
    }

    #[test]
    fn select_unknown_length_is_none() {
        let mut dict = dictionary(&["crane"]);
        assert_eq!(dict.select_unused_word(8), None);
    }

    #[test]
    fn mark_used_excludes_word() {
        let mut dict = dictionary(&["crane", "slate"]);
        dict.mark_used(&Word::new("crane").unwrap());

        assert_eq!(dict.select_unused_word(5).unwrap().text(), "SLATE");
        assert_eq!(dict.select_unused_word(5), None);
    }

    #[test]
    fn with_used_restores_previous_session() {
        let mut used = UsedWords::new();
        used.insert(Word::new("slate").unwrap());
        let mut dict = dictionary(&["crane", "slate"]).with_used(used);

        assert_eq!(dict.select_unused_word(5).unwrap().text(), "CRANE");
    }

    #[test]
    fn save_used_writes_configured_file() {
        let path = std::env::temp_dir().join(format!("wordle_dict_used_{}.txt", std::process::id()));
        let mut dict = dictionary(&["crane"]).persist_used_to(&path);

        let word = dict.select_unused_word(5).unwrap();
        dict.save_used().unwrap();
        assert!(UsedWords::load(&path).unwrap().contains(&word));

        std::fs::remove_file(&path).unwrap();
        assert!(dictionary(&["crane"]).save_used().is_ok());
    }

    #[test]
    fn is_valid_word_ignores_case() {
        let dict = dictionary(&["crane", "slate", "slate"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.is_valid_word("crane"));
        assert!(dict.is_valid_word("SLATE"));
        assert!(!dict.is_valid_word("xyzzy"));
        assert!(!dict.is_valid_word("cr4ne"));
        assert!(!dict.is_valid_word(""));
    }

    #[test]
    fn same_seed_same_choices() {
        let words = ["crane", "slate", "irate", "stare", "raise", "arise"];
        let mut a = dictionary(&words);
        let mut b = dictionary(&words);
        for _ in 0..words.len() {
            assert_eq!(a.select_unused_word(5), b.select_unused_word(5));
        }
    }

    #[test]
    fn embedded_dictionary_covers_every_default_length() {
        let dict = Dictionary::with_seed(loader::words_from_slice(WORDS), 0);
        assert_eq!(dict.len(), WORDS_COUNT);
        for length in 5..=10 {
            assert!(dict.unused_count(length) > 0, "no {length}-letter words");
        }
    }

    #[test]
    fn shared_handle_sees_one_state() {
        let mut shared = SharedDictionary::new(dictionary(&["crane", "slate"]));
        let mut other = shared.clone();

        let first = shared.select_unused_word(5).unwrap();
        let second = other.select_unused_word(5).unwrap();
        assert_ne!(first, second);
        assert_eq!(shared.select_unused_word(5), None);

        other.reset();
        assert_eq!(shared.lock().unused_count(5), 2);
    }
}
