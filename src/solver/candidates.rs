//! Score-ordered candidate words

use super::constraints::ConstraintModel;
use crate::core::Word;
use crate::error::WordleError;
use crate::scoring::WordScorer;

/// A dictionary word with its precomputed score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// Working set of candidate words, highest score first
///
/// Ties keep dictionary order. A set is never mutated in place; narrowing
/// produces a new set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    entries: Vec<ScoredWord>,
}

impl CandidateSet {
    /// Score the whole dictionary and sort it
    ///
    /// # Errors
    /// Propagates [`WordleError::UnknownLetter`] from the scorer; no word is ever
    /// silently dropped or zero-scored.
    pub fn new(dictionary: &[Word], scorer: &WordScorer<'_>) -> Result<Self, WordleError> {
        let mut entries = dictionary
            .iter()
            .map(|word| {
                scorer.score(word).map(|score| ScoredWord {
                    word: word.clone(),
                    score,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable, so equal scores keep dictionary order
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(Self { entries })
    }

    /// Words consistent with `model`, in score order
    #[must_use]
    pub fn filtered(&self, model: &ConstraintModel) -> Vec<&Word> {
        self.entries
            .iter()
            .filter(|entry| model.is_consistent(&entry.word))
            .map(|entry| &entry.word)
            .collect()
    }

    /// A new working set holding only the words consistent with `model`
    #[must_use]
    pub fn narrow(&self, model: &ConstraintModel) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| model.is_consistent(&entry.word))
                .cloned()
                .collect(),
        }
    }

    /// Highest-scoring word in the set
    ///
    /// # Errors
    /// Returns [`WordleError::EmptyCandidateSet`] when no word remains.
    pub fn best(&self) -> Result<&Word, WordleError> {
        self.best_entry().map(|entry| &entry.word)
    }

    /// Highest-scoring entry, including its score
    ///
    /// # Errors
    /// Returns [`WordleError::EmptyCandidateSet`] when no word remains.
    pub fn best_entry(&self) -> Result<&ScoredWord, WordleError> {
        self.entries.first().ok_or(WordleError::EmptyCandidateSet)
    }

    /// Score of a word, if it is in the set
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| &entry.word == word)
            .map(|entry| entry.score)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|entry| &entry.word == word)
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|entry| &entry.word)
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoredWord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
