//! Core domain types for the word game
//!
//! Words, feedback, and the judge that produces feedback. Everything here is pure
//! and has no knowledge of dictionaries, scoring, or presentation.

mod feedback;
mod judge;
mod word;

pub use feedback::{Feedback, FeedbackSymbol};
pub use judge::evaluate;
pub use word::{WORD_LENGTH, Word};
