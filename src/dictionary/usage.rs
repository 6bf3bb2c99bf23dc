//! Used-word tracking
//!
//! Words served as round targets are recorded here so later rounds in the
//! session (or later sessions, when persisted) pick fresh ones.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// The set of target words already played
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedWords {
    words: FxHashSet<Word>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Record `word`; returns false if it was already recorded
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Load a newline-delimited list of used words
    ///
    /// A missing file yields an empty set. Lines that are not valid words are skipped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = match fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e),
        };

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| Word::new(line).ok())
            .collect();

        Ok(Self { words })
    }

    /// Write the set to `path`, one word per line in sorted order
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut sorted: Vec<&str> = self.words.iter().map(Word::text).collect();
        sorted.sort_unstable();

        let mut content = sorted.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content)
    }
}
