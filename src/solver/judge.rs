//! Sources of feedback for the solver

use crate::core::{Feedback, Word, evaluate};
use crate::error::WordleError;

/// Something that answers a guess with feedback
///
/// The solver does not care whether the answer comes from a known secret, a
/// game session that counts tries, or a person relaying what they saw.
pub trait Judge {
    /// Produce feedback for `guess`
    ///
    /// # Errors
    /// Implementations return an error when no feedback can be produced, for
    /// example when their session is over or input could not be read.
    fn judge(&mut self, guess: &Word) -> Result<Feedback, WordleError>;
}

/// Judges guesses against a fixed secret word
#[derive(Debug, Clone)]
pub struct SecretJudge {
    secret: Word,
}

impl SecretJudge {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

impl Judge for SecretJudge {
    fn judge(&mut self, guess: &Word) -> Result<Feedback, WordleError> {
        Ok(evaluate(&self.secret, guess))
    }
}
