//! Main solver interface

use super::candidates::CandidateSet;
use super::constraints::ConstraintTracker;
use super::judge::Judge;
use crate::core::{Feedback, Word};
use crate::error::WordleError;

/// Default number of tries in a game
pub const DEFAULT_TRIES: usize = 6;

/// Where the solver is in its game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// `round` guesses have been made so far
    InProgress { round: usize },
    /// The last guess was all matches
    Won { rounds: usize },
    /// The try budget ran out without a win
    Lost { rounds: usize },
}

impl SolverState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    #[must_use]
    pub const fn rounds(self) -> usize {
        match self {
            Self::InProgress { round } => round,
            Self::Won { rounds } | Self::Lost { rounds } => rounds,
        }
    }
}

/// What happened in a single round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    pub guess: Word,
    /// Score of the guess, if it was a remaining candidate
    pub score: Option<f64>,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a finished game
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub state: SolverState,
    pub rounds: Vec<RoundReport>,
}

impl SolveOutcome {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, SolverState::Won { .. })
    }
}

/// Letter-frequency solver
///
/// Always guesses the highest-scoring word still consistent with every piece of
/// feedback. Owns its working candidate set, so several solvers can share one
/// scored dictionary.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    dictionary: &'a CandidateSet,
    working: CandidateSet,
    tracker: ConstraintTracker,
    tries: usize,
    state: SolverState,
}

impl<'a> Solver<'a> {
    /// Create a solver over a scored dictionary with a try budget
    #[must_use]
    pub fn new(dictionary: &'a CandidateSet, tries: usize) -> Self {
        Self {
            dictionary,
            working: dictionary.clone(),
            tracker: ConstraintTracker::new(),
            tries,
            state: SolverState::InProgress { round: 0 },
        }
    }

    /// Best guess given everything observed so far
    ///
    /// # Errors
    /// - [`WordleError::SessionOver`] once the game is won or lost
    /// - [`WordleError::EmptyCandidateSet`] if the feedback eliminated every word
    pub fn next_guess(&self) -> Result<&Word, WordleError> {
        if self.state.is_finished() {
            return Err(WordleError::SessionOver);
        }
        self.working.best()
    }

    /// Play one round: guess, ask the judge, and narrow the candidates
    ///
    /// # Errors
    /// Same as [`Solver::next_guess`], plus anything the judge reports.
    pub fn play_round<J: Judge + ?Sized>(&mut self, judge: &mut J) -> Result<RoundReport, WordleError> {
        let guess = self.next_guess()?.clone();
        let feedback = judge.judge(&guess)?;
        self.observe(guess, feedback)
    }

    /// Play rounds until the game is won or lost
    ///
    /// # Errors
    /// An empty candidate set or a judge failure ends the game with an error.
    pub fn run<J: Judge + ?Sized>(&mut self, judge: &mut J) -> Result<SolveOutcome, WordleError> {
        let mut rounds = Vec::new();
        while !self.state.is_finished() {
            rounds.push(self.play_round(judge)?);
        }
        Ok(SolveOutcome {
            state: self.state,
            rounds,
        })
    }

    /// Record feedback for a guess made outside [`Solver::play_round`]
    ///
    /// # Errors
    /// Returns [`WordleError::SessionOver`] once the game is won or lost.
    pub fn observe(&mut self, guess: Word, feedback: Feedback) -> Result<RoundReport, WordleError> {
        let SolverState::InProgress { round } = self.state else {
            return Err(WordleError::SessionOver);
        };

        let candidates_before = self.working.len();
        let score = self.working.score_of(&guess);
        let solved = feedback.is_perfect();

        self.tracker.record(guess.clone(), feedback);
        self.working = self.working.narrow(self.tracker.model());

        let round = round + 1;
        self.state = if solved {
            SolverState::Won { rounds: round }
        } else if round >= self.tries {
            SolverState::Lost { rounds: round }
        } else {
            SolverState::InProgress { round }
        };

        log::debug!(
            "round {round}: {} {} ({candidates_before} -> {} candidates)",
            guess.text().to_uppercase(),
            feedback,
            self.working.len()
        );

        Ok(RoundReport {
            round,
            guess,
            score,
            feedback,
            candidates_before,
            candidates_after: self.working.len(),
        })
    }

    /// Take back the most recent round
    ///
    /// The working set is regenerated from the full dictionary. Returns `false`
    /// if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.tracker.undo().is_none() {
            return false;
        }
        self.working = self.dictionary.narrow(self.tracker.model());
        self.state = SolverState::InProgress {
            round: self.tracker.history().len(),
        };
        true
    }

    /// Start a fresh game with the same dictionary and budget
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.working = self.dictionary.clone();
        self.state = SolverState::InProgress { round: 0 };
    }

    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    #[must_use]
    pub const fn tracker(&self) -> &ConstraintTracker {
        &self.tracker
    }

    /// The current working set
    #[must_use]
    pub const fn remaining(&self) -> &CandidateSet {
        &self.working
    }

    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{LetterStatistics, WordScorer};
    use crate::solver::SecretJudge;

    fn setup(words: &[&str]) -> CandidateSet {
        let stats = LetterStatistics::parse(
            "a,8.5 b,2.1 c,4.5 d,3.4 e,11.2 g,2.5 i,7.5 l,5.5 n,6.7 o,7.2 r,7.6 s,5.7 t,7.0 u,3.6 y,1.8",
        )
        .unwrap();
        let scorer = WordScorer::new(&stats);
        let dictionary: Vec<Word> = words.iter().map(|w| Word::new(w).unwrap()).collect();
        CandidateSet::new(&dictionary, &scorer).unwrap()
    }

    const WORDS: &[&str] = &["crane", "slate", "irate", "crate", "grate", "trace", "alloy"];

    #[test]
    fn first_guess_is_highest_score() {
        let candidates = setup(WORDS);
        let solver = Solver::new(&candidates, DEFAULT_TRIES);
        assert_eq!(solver.next_guess().unwrap(), candidates.best().unwrap());
        assert_eq!(solver.state(), SolverState::InProgress { round: 0 });
    }

    #[test]
    fn solves_every_dictionary_word() {
        let candidates = setup(WORDS);
        for &secret in WORDS {
            let mut solver = Solver::new(&candidates, DEFAULT_TRIES);
            let mut judge = SecretJudge::new(Word::new(secret).unwrap());

            let outcome = solver.run(&mut judge).unwrap();
            assert!(outcome.is_won(), "failed to solve {secret}");
            assert_eq!(outcome.rounds.last().unwrap().guess.text(), secret);
            assert_eq!(outcome.state.rounds(), outcome.rounds.len());
        }
    }

    #[test]
    fn correct_guess_wins_same_round() {
        let candidates = setup(WORDS);
        let best = candidates.best().unwrap().clone();
        let mut solver = Solver::new(&candidates, DEFAULT_TRIES);
        let mut judge = SecretJudge::new(best.clone());

        let report = solver.play_round(&mut judge).unwrap();
        assert_eq!(report.guess, best);
        assert!(report.feedback.is_perfect());
        assert_eq!(solver.state(), SolverState::Won { rounds: 1 });
        assert!(matches!(solver.next_guess(), Err(WordleError::SessionOver)));
    }

    #[test]
    fn candidate_counts_never_grow() {
        let candidates = setup(WORDS);
        let mut solver = Solver::new(&candidates, DEFAULT_TRIES);
        let mut judge = SecretJudge::new(Word::new("grate").unwrap());

        let outcome = solver.run(&mut judge).unwrap();
        for report in &outcome.rounds {
            assert!(report.candidates_after <= report.candidates_before);
        }
    }

    #[test]
    fn secret_outside_dictionary_is_fatal() {
        let candidates = setup(&["crane", "slate"]);
        let mut solver = Solver::new(&candidates, DEFAULT_TRIES);
        let mut judge = SecretJudge::new(Word::new("buoys").unwrap());

        assert!(matches!(
            solver.run(&mut judge),
            Err(WordleError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn budget_exhaustion_is_lost() {
        let candidates = setup(WORDS);
        let mut solver = Solver::new(&candidates, 1);
        let secret = Word::new("alloy").unwrap();
        assert_ne!(candidates.best().unwrap(), &secret);
        let mut judge = SecretJudge::new(secret);

        let outcome = solver.run(&mut judge).unwrap();
        assert_eq!(outcome.state, SolverState::Lost { rounds: 1 });
        assert_eq!(outcome.rounds.len(), 1);
    }

    #[test]
    fn undo_restores_previous_round() {
        let candidates = setup(WORDS);
        let mut solver = Solver::new(&candidates, DEFAULT_TRIES);
        let mut judge = SecretJudge::new(Word::new("alloy").unwrap());

        let first = solver.next_guess().unwrap().clone();
        solver.play_round(&mut judge).unwrap();
        assert!(solver.remaining().len() < candidates.len());

        assert!(solver.undo());
        assert_eq!(solver.state(), SolverState::InProgress { round: 0 });
        assert_eq!(solver.remaining(), &candidates);
        assert_eq!(solver.next_guess().unwrap(), &first);
        assert!(!solver.undo());
    }

    #[test]
    fn observe_external_guess() {
        let candidates = setup(WORDS);
        let mut solver = Solver::new(&candidates, DEFAULT_TRIES);
        let guess = Word::new("stomp").unwrap();

        let report = solver
            .observe(guess, Feedback::parse("-----").unwrap())
            .unwrap();
        assert_eq!(report.score, None);
        assert_eq!(report.round, 1);
        // Every word containing S or T is gone
        assert!(solver.remaining().words().all(|w| !w.has_letter(b's') && !w.has_letter(b't')));

        solver.reset();
        assert_eq!(solver.remaining().len(), candidates.len());
        assert!(solver.tracker().history().is_empty());
    }
}
