//! Per-letter weight table

use crate::error::WordleError;
use rustc_hash::FxHashMap;

/// Read-only mapping from letter to a non-negative weight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterStatistics {
    weights: FxHashMap<u8, f64>,
}

impl LetterStatistics {
    /// Parse whitespace-separated `letter,weight` tokens
    ///
    /// Letters are case-normalized. A letter listed twice keeps its last weight.
    ///
    /// # Errors
    /// Returns [`WordleError::InvalidLetterEntry`] for a token that is not a single
    /// ASCII letter, a comma, and a finite non-negative number.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::scoring::LetterStatistics;
    ///
    /// let stats = LetterStatistics::parse("a,8.5 b,2.07\nE,11.16").unwrap();
    /// assert_eq!(stats.weight(b'e'), Some(11.16));
    /// assert_eq!(stats.len(), 3);
    /// ```
    pub fn parse(input: &str) -> Result<Self, WordleError> {
        Self::from_tokens(input.split_whitespace())
    }

    /// Build from already-split `letter,weight` tokens
    ///
    /// # Errors
    /// Same as [`LetterStatistics::parse`].
    pub fn from_tokens<'s>(tokens: impl IntoIterator<Item = &'s str>) -> Result<Self, WordleError> {
        let mut weights = FxHashMap::default();
        for token in tokens {
            let (letter, weight) = parse_entry(token)?;
            weights.insert(letter, weight);
        }
        Ok(Self { weights })
    }

    /// Weight for a lowercase ASCII letter, if the table has one
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: u8) -> Option<f64> {
        self.weights.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

fn parse_entry(token: &str) -> Result<(u8, f64), WordleError> {
    let invalid = || WordleError::InvalidLetterEntry(token.to_string());

    let (letter, weight) = token.split_once(',').ok_or_else(invalid)?;

    let letter = match letter.trim().as_bytes() {
        [ch] if ch.is_ascii_alphabetic() => ch.to_ascii_lowercase(),
        _ => return Err(invalid()),
    };

    let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(invalid());
    }

    Ok((letter, weight))
}
