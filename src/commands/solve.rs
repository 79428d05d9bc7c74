//! Word solving command
//!
//! Lets the solver play one session and returns the solution path.

use crate::core::Word;
use crate::error::WordleError;
use crate::game::{GameSession, SessionStatus};
use crate::solver::{CandidateSet, DEFAULT_TRIES, RoundReport, Solver};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    /// Secret to solve; drawn from the dictionary when `None`
    pub target: Option<String>,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: Option<String>) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_TRIES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<RoundReport>,
    pub status: SessionStatus,
    /// Set when the candidate set ran dry before the game ended
    pub exhausted: bool,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == SessionStatus::Won
    }
}

/// Solve a word with the letter-frequency solver
///
/// An exhausted candidate set ends the session and is reported through
/// [`SolveResult::exhausted`] rather than as an error, so the steps played so far
/// are kept.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - No target was given and the dictionary is empty
pub fn solve_word<R: Rng + ?Sized>(
    config: SolveConfig,
    dictionary: &[Word],
    candidates: &CandidateSet,
    rng: &mut R,
) -> Result<SolveResult, WordleError> {
    let mut session = match config.target {
        Some(target) => GameSession::new(Word::new(target)?, config.max_guesses),
        None => GameSession::random(dictionary, config.max_guesses, rng)?,
    };

    if !candidates.contains(session.secret()) {
        log::warn!(
            "{} is not in the dictionary; the solver cannot find it",
            session.secret()
        );
    }

    let mut solver = Solver::new(candidates, config.max_guesses);
    let mut steps = Vec::new();
    let mut exhausted = false;

    while !session.is_over() {
        match solver.play_round(&mut session) {
            Ok(step) => steps.push(step),
            Err(WordleError::EmptyCandidateSet) => {
                log::error!("no candidates remain after {} guesses", steps.len());
                exhausted = true;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(SolveResult {
        target: session.secret().clone(),
        steps,
        status: session.status(),
        exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WordScorer;
    use crate::wordlists::loader::{default_dictionary, default_letters};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (Vec<Word>, CandidateSet) {
        let stats = default_letters().unwrap();
        let dictionary = default_dictionary();
        let candidates = CandidateSet::new(&dictionary, &WordScorer::new(&stats)).unwrap();
        (dictionary, candidates)
    }

    #[test]
    fn solve_word_records_history() {
        let (dictionary, candidates) = setup();
        let mut rng = StdRng::seed_from_u64(1);
        let config = SolveConfig::new(Some("crane".to_string()));

        let result = solve_word(config, &dictionary, &candidates, &mut rng).unwrap();

        assert!(!result.steps.is_empty());
        assert!(result.steps.len() <= DEFAULT_TRIES);
        assert!(!result.exhausted);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        if result.success() {
            assert_eq!(result.steps.last().unwrap().guess.text(), "crane");
        }
    }

    #[test]
    fn solve_random_target_from_dictionary() {
        let (dictionary, candidates) = setup();
        let mut rng = StdRng::seed_from_u64(42);

        let result = solve_word(SolveConfig::new(None), &dictionary, &candidates, &mut rng).unwrap();
        assert!(dictionary.contains(&result.target));
        assert_ne!(result.status, SessionStatus::InProgress);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let (dictionary, candidates) = setup();
        let mut rng = StdRng::seed_from_u64(1);
        let config = SolveConfig::new(Some("toolong".to_string()));

        assert!(matches!(
            solve_word(config, &dictionary, &candidates, &mut rng),
            Err(WordleError::InvalidGuessLength(7))
        ));
    }

    #[test]
    fn solve_target_outside_dictionary_reports_exhaustion() {
        let stats = default_letters().unwrap();
        let dictionary = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
        let candidates = CandidateSet::new(&dictionary, &WordScorer::new(&stats)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let config = SolveConfig::new(Some("buoys".to_string()));

        let result = solve_word(config, &dictionary, &candidates, &mut rng).unwrap();
        assert!(!result.success());
        assert!(result.exhausted);
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let (dictionary, candidates) = setup();
        let mut rng = StdRng::seed_from_u64(1);
        let mut config = SolveConfig::new(Some("alloy".to_string()));
        config.max_guesses = 1;

        let result = solve_word(config, &dictionary, &candidates, &mut rng).unwrap();
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.status, SessionStatus::Lost);
    }
}
