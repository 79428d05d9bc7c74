//! Letter-frequency ranking of words
//!
//! [`LetterStatistics`] is loaded once and shared read-only; [`WordScorer`] borrows it
//! to rank dictionary words.

mod letters;
mod scorer;

pub use letters::LetterStatistics;
pub use scorer::WordScorer;
