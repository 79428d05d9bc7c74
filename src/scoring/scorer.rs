//! Word scoring from distinct-letter weights

use super::LetterStatistics;
use crate::core::Word;
use crate::error::WordleError;

/// Scores words by summing the weights of their distinct letters
#[derive(Debug, Clone, Copy)]
pub struct WordScorer<'a> {
    stats: &'a LetterStatistics,
}

impl<'a> WordScorer<'a> {
    #[must_use]
    pub const fn new(stats: &'a LetterStatistics) -> Self {
        Self { stats }
    }

    /// Score a word
    ///
    /// Each distinct letter contributes its weight once and the sum is rounded to
    /// two decimals. Letters are summed in alphabetical order so any permutation of
    /// a word scores identically.
    ///
    /// # Errors
    /// Returns [`WordleError::UnknownLetter`] if a letter has no weight.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::scoring::{LetterStatistics, WordScorer};
    ///
    /// let stats = LetterStatistics::parse("l,1.25 a,2.5 m,0.5").unwrap();
    /// let scorer = WordScorer::new(&stats);
    ///
    /// // L, A and M each counted once
    /// assert_eq!(scorer.score(&Word::new("llama").unwrap()).unwrap(), 4.25);
    /// ```
    pub fn score(&self, word: &Word) -> Result<f64, WordleError> {
        let mut total = 0.0;
        for letter in word.distinct_letters() {
            total += self
                .stats
                .weight(letter)
                .ok_or(WordleError::UnknownLetter(char::from(letter)))?;
        }
        Ok(round_to_hundredths(total))
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
