//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Each line contributes its first whitespace-separated token, so lists that
/// carry extra columns (frequencies, tags) load as-is. Tokens that are not
/// purely alphabetic are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Parse words from text in the word-list file format
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|token| !token.starts_with('#'))
        .filter_map(|token| {
            let word = Word::new(token).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} word list entries that are not plain words");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::dictionary::loader::words_from_slice;
/// use wordle_game::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "dictionary", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "DICTIONARY");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "don't", "", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_text_takes_first_token() {
        let text = "# header\nabandon 12 v\n\n  bacon\nre-do x\nzebra: n\ncafe\n";
        let words = words_from_text(text);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["ABANDON", "BACON", "CAFE"]);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::dictionary::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/wordle/words.txt").is_err());
    }
}
