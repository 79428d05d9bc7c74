//! Feedback-driven candidate filtering and guess selection
//!
//! - [`ConstraintTracker`] turns feedback into a [`ConstraintModel`]
//! - [`CandidateSet`] keeps the scored dictionary and filters it by a model
//! - [`Solver`] runs the guess → feedback → narrow loop against a [`Judge`]

mod candidates;
mod constraints;
mod engine;
mod judge;

pub use candidates::{CandidateSet, ScoredWord};
pub use constraints::{ConstraintModel, ConstraintTracker};
pub use engine::{DEFAULT_TRIES, RoundReport, SolveOutcome, Solver, SolverState};
pub use judge::{Judge, SecretJudge};
