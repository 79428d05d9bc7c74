//! Dictionary and letter table loading
//!
//! Provides functions to load data from files or from the embedded defaults.

use super::{LETTERS, WORDS};
use crate::core::Word;
use crate::error::WordleError;
use crate::scoring::LetterStatistics;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse a whitespace-delimited dictionary
///
/// Only entries of exactly five ASCII letters are kept. Case is normalized and
/// repeated words keep their first position.
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("Crane slate\nno toolong crane");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn parse_dictionary(content: &str) -> Vec<Word> {
    words_from_slice(&content.split_whitespace().collect::<Vec<_>>())
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns [`WordleError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordleError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_dictionary(&content))
}

/// Load a `letter,weight` table from a file
///
/// # Errors
///
/// Returns [`WordleError::Io`] if the file cannot be read, or
/// [`WordleError::InvalidLetterEntry`] for a malformed entry.
pub fn load_letters<P: AsRef<Path>>(path: P) -> Result<LetterStatistics, WordleError> {
    let content = fs::read_to_string(path)?;
    LetterStatistics::parse(&content)
}

/// Convert a string slice to a Word vector, skipping ineligible entries
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::words_from_slice;
/// use wordle_sieve::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// The embedded dictionary
#[must_use]
pub fn default_dictionary() -> Vec<Word> {
    words_from_slice(WORDS)
}

/// The embedded letter-frequency table
///
/// # Errors
///
/// Returns [`WordleError::InvalidLetterEntry`] if the embedded table is malformed.
pub fn default_letters() -> Result<LetterStatistics, WordleError> {
    LetterStatistics::from_tokens(LETTERS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_ineligible() {
        let input = &["crane", "toolong", "abc", "sl4te", "SLATE"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_drops_duplicates() {
        let words = words_from_slice(&["crane", "slate", "CRANE", "crane"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn parse_dictionary_splits_on_any_whitespace() {
        let words = parse_dictionary("crane\tslate\r\nirate   grate\n");
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_dictionary("/nonexistent/words.txt"),
            Err(WordleError::Io(_))
        ));
        assert!(matches!(
            load_letters("/nonexistent/letters.txt"),
            Err(WordleError::Io(_))
        ));
    }

    #[test]
    fn default_letters_cover_alphabet() {
        let stats = default_letters().unwrap();
        assert_eq!(stats.len(), 26);
        for letter in b'a'..=b'z' {
            assert!(stats.weight(letter).is_some());
        }
    }
}
