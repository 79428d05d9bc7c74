//! Five-letter word representation
//!
//! A Word is validated and case-normalized once; every later consumer can index
//! its bytes without re-checking.

use crate::error::WordleError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed word length for every word in the game
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and case is normalized.
    ///
    /// # Errors
    /// - [`WordleError::InvalidGuessLength`] if the word is not exactly 5 characters
    /// - [`WordleError::InvalidCharacters`] if it contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordleError> {
        let text = text.as_ref().trim().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordleError::InvalidGuessLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordleError::InvalidCharacters(text));
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }

    /// Get the count of each letter in the word
    ///
    /// This is the letter multiset the judge consumes from.
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct letters in alphabetical order
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<u8> {
        let mut seen = [false; 26];
        for &ch in &self.chars {
            seen[usize::from(ch - b'a')] = true;
        }
        (b'a'..=b'z')
            .filter(|&ch| seen[usize::from(ch - b'a')])
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
