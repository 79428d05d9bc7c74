//! Game sessions
//!
//! A [`GameSession`] owns the secret and the try budget. Players submit guesses to
//! it directly; the solver plays it through the [`crate::solver::Judge`] trait.

mod session;

pub use session::{GameSession, SessionStatus};
