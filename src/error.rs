//! Error types for scoring, filtering and game sessions
//!
//! Scoring and filtering errors are always propagated to the caller. A word with an
//! unknown letter is never zero-scored and an exhausted candidate set is never turned
//! into an empty success.
//!
//! # Recoverability
//!
//! - [`WordleError::InvalidGuessLength`], [`WordleError::InvalidCharacters`] and
//!   [`WordleError::InvalidFeedback`] are user input mistakes; interactive loops re-prompt.
//! - [`WordleError::EmptyCandidateSet`] ends the session: either the secret is outside
//!   the dictionary or the feedback received was contradictory.
//! - Everything else is a setup or I/O failure.

use std::io;

/// Errors produced by the wordle engine
#[derive(Debug, thiserror::Error)]
pub enum WordleError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidGuessLength(usize),

    #[error("word must contain only ASCII letters: \"{0}\"")]
    InvalidCharacters(String),

    #[error("letter '{0}' has no entry in the letter statistics")]
    UnknownLetter(char),

    #[error("no candidate words remain; the accumulated constraints are contradictory")]
    EmptyCandidateSet,

    #[error("dictionary contains no five-letter words")]
    EmptyDictionary,

    #[error("invalid letter statistics entry: \"{0}\"")]
    InvalidLetterEntry(String),

    #[error("invalid feedback pattern: \"{0}\" (use G/Y/- or 🟩🟨⬜)")]
    InvalidFeedback(String),

    #[error("the session is already over")]
    SessionOver,

    #[error("aborted by user")]
    Aborted,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl WordleError {
    /// Whether an interactive loop should re-prompt instead of ending the session
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessLength(_) | Self::InvalidCharacters(_) | Self::InvalidFeedback(_)
        )
    }
}
