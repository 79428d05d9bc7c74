//! Per-letter feedback for a guess
//!
//! Feedback is a fixed sequence of five symbols. The core never deals with colours;
//! presentation layers map the symbols themselves.

use super::word::WORD_LENGTH;
use crate::error::WordleError;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Correct letter in the correct position
    Match,
    /// Letter is in the secret at a different position
    Present,
    /// This occurrence of the letter is not in the secret
    Absent,
}

impl FeedbackSymbol {
    /// Emoji used by the public game for this symbol
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse from a character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for a match
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Match),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn to_char(self) -> char {
        match self {
            Self::Match => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a full guess, one symbol per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// All matches: the guess was the secret
    pub const PERFECT: Self = Self([FeedbackSymbol::Match; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    /// Symbol at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    /// Check if every position matched
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_matches(&self) -> usize {
        self.count(FeedbackSymbol::Match)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(FeedbackSymbol::Present)
    }

    fn count(&self, symbol: FeedbackSymbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns [`WordleError::InvalidFeedback`] if the string is not exactly five
    /// recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, WordleError> {
        let trimmed = s.trim();
        let invalid = || WordleError::InvalidFeedback(trimmed.to_string());

        let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];
        let mut count = 0;
        for ch in trimmed.chars() {
            if count == WORD_LENGTH {
                return Err(invalid());
            }
            symbols[count] = FeedbackSymbol::from_char(ch).ok_or_else(invalid)?;
            count += 1;
        }

        if count == WORD_LENGTH {
            Ok(Self(symbols))
        } else {
            Err(invalid())
        }
    }

    /// Convert to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackSymbol::{Absent, Match, Present};

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_matches(), 5);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
    }

    #[test]
    fn counts() {
        let feedback = Feedback::new([Present, Match, Match, Absent, Present]);
        assert_eq!(feedback.count_matches(), 2);
        assert_eq!(feedback.count_present(), 2);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse(" gyg_. ").unwrap();

        assert_eq!(p1, Feedback::new([Match, Present, Match, Absent, Absent]));
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GYGGYY").is_err()); // Too long
        assert!(Feedback::parse("GYG").is_err()); // Too short
        assert!(matches!(
            Feedback::parse("GXGGY"),
            Err(WordleError::InvalidFeedback(_))
        ));
        assert!(Feedback::parse("").is_err());
    }

    #[test]
    fn display_and_emoji() {
        let feedback = Feedback::new([Match, Present, Absent, Match, Present]);
        assert_eq!(feedback.to_string(), "GY-GY");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.to_string().parse::<Feedback>().unwrap(), feedback);
    }
}
