//! A single game: one secret, a try budget, and the guesses made so far

use crate::core::{Feedback, Word, evaluate};
use crate::error::WordleError;
use crate::solver::{CandidateSet, Judge, SolveOutcome, Solver};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// A game against a fixed secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    tries: usize,
    remaining: usize,
    history: Vec<(Word, Feedback)>,
    status: SessionStatus,
}

impl GameSession {
    /// Start a session with a known secret
    #[must_use]
    pub fn new(secret: Word, tries: usize) -> Self {
        log::info!("new session with {tries} tries");
        Self {
            secret,
            tries,
            remaining: tries,
            history: Vec::new(),
            status: if tries == 0 {
                SessionStatus::Lost
            } else {
                SessionStatus::InProgress
            },
        }
    }

    /// Start a session with a secret drawn uniformly from `dictionary`
    ///
    /// # Errors
    /// Returns [`WordleError::EmptyDictionary`] if there is nothing to draw from.
    pub fn random<R: Rng + ?Sized>(
        dictionary: &[Word],
        tries: usize,
        rng: &mut R,
    ) -> Result<Self, WordleError> {
        let secret = dictionary
            .choose(rng)
            .ok_or(WordleError::EmptyDictionary)?;
        Ok(Self::new(secret.clone(), tries))
    }

    /// Submit a guess typed by a player
    ///
    /// A malformed guess does not use up a try.
    ///
    /// # Errors
    /// - [`WordleError::InvalidGuessLength`] / [`WordleError::InvalidCharacters`]
    ///   for malformed input
    /// - [`WordleError::SessionOver`] once the game is won or lost
    pub fn guess(&mut self, input: &str) -> Result<Feedback, WordleError> {
        if self.is_over() {
            return Err(WordleError::SessionOver);
        }
        let word = Word::new(input)?;
        self.submit(&word)
    }

    /// Submit an already validated word
    ///
    /// # Errors
    /// Returns [`WordleError::SessionOver`] once the game is won or lost.
    pub fn submit(&mut self, word: &Word) -> Result<Feedback, WordleError> {
        if self.is_over() {
            return Err(WordleError::SessionOver);
        }

        let feedback = evaluate(&self.secret, word);
        self.history.push((word.clone(), feedback));
        self.remaining -= 1;

        if feedback.is_perfect() {
            self.status = SessionStatus::Won;
            log::info!("session won in {} tries", self.history.len());
        } else if self.remaining == 0 {
            self.status = SessionStatus::Lost;
            log::info!("session lost; secret was {}", self.secret);
        }

        Ok(feedback)
    }

    /// Let the solver play out the rest of this session
    ///
    /// The solver's budget is the number of tries left; guesses already made are
    /// fed to it first so it starts from the same knowledge.
    ///
    /// # Errors
    /// Propagates [`WordleError::EmptyCandidateSet`] when the secret is not in the
    /// solver's dictionary, and [`WordleError::SessionOver`] if nothing is left to play.
    pub fn autoplay(&mut self, candidates: &CandidateSet) -> Result<SolveOutcome, WordleError> {
        if self.is_over() {
            return Err(WordleError::SessionOver);
        }
        let mut solver = self.solver_for(candidates)?;
        solver.run(self)
    }

    /// A solver that already knows this session's guesses
    ///
    /// # Errors
    /// Returns [`WordleError::SessionOver`] if the history does not fit the budget.
    pub fn solver_for<'a>(&self, candidates: &'a CandidateSet) -> Result<Solver<'a>, WordleError> {
        let mut solver = Solver::new(candidates, self.tries);
        for (guess, feedback) in &self.history {
            solver.observe(guess.clone(), *feedback)?;
        }
        Ok(solver)
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != SessionStatus::InProgress
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    #[must_use]
    pub const fn remaining_tries(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }
}

impl Judge for GameSession {
    fn judge(&mut self, guess: &Word) -> Result<Feedback, WordleError> {
        self.submit(guess)
    }
}
