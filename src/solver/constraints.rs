//! Constraint model built from guess feedback
//!
//! The [`ConstraintTracker`] folds every (guess, feedback) pair into a
//! [`ConstraintModel`], which candidate filtering then consults through
//! [`ConstraintModel::is_consistent`].
//!
//! # Repeated letters
//!
//! A guess is applied as a batch. All Match/Present symbols are recorded first,
//! then the Absent symbols. An Absent on a letter that is required (by this guess
//! or an earlier one) only says there are no further copies; it caps the count and
//! excludes that position instead of excluding the letter everywhere.

use crate::core::{Feedback, FeedbackSymbol, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Accumulated knowledge about the secret word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintModel {
    positional_matches: [Option<u8>; WORD_LENGTH],
    positional_exclusions: [FxHashSet<u8>; WORD_LENGTH],
    required_letters: FxHashMap<u8, usize>,
    maximum_counts: FxHashMap<u8, usize>,
    global_exclusions: FxHashSet<u8>,
    contradiction: bool,
}

impl ConstraintModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the model
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        // Copies of each letter this guess proved to be in the secret
        let mut credited: FxHashMap<u8, usize> = FxHashMap::default();

        for (i, &symbol) in feedback.symbols().iter().enumerate() {
            let letter = guess.char_at(i);
            match symbol {
                FeedbackSymbol::Match => {
                    match self.positional_matches[i] {
                        Some(existing) if existing != letter => {
                            log::warn!(
                                "position {} cannot be both '{}' and '{}'",
                                i + 1,
                                char::from(existing),
                                char::from(letter)
                            );
                            self.contradiction = true;
                        }
                        _ => self.positional_matches[i] = Some(letter),
                    }
                    *credited.entry(letter).or_insert(0) += 1;
                }
                FeedbackSymbol::Present => {
                    self.positional_exclusions[i].insert(letter);
                    *credited.entry(letter).or_insert(0) += 1;
                }
                FeedbackSymbol::Absent => {}
            }
        }

        for (&letter, &count) in &credited {
            if self.global_exclusions.contains(&letter) {
                log::warn!(
                    "'{}' was reported absent earlier but is now in the word",
                    char::from(letter)
                );
                self.contradiction = true;
                continue;
            }
            let minimum = self.required_letters.entry(letter).or_insert(0);
            *minimum = (*minimum).max(count);
        }

        for (i, &symbol) in feedback.symbols().iter().enumerate() {
            if symbol != FeedbackSymbol::Absent {
                continue;
            }
            let letter = guess.char_at(i);
            if self.required_letters.contains_key(&letter) {
                self.positional_exclusions[i].insert(letter);
                let cap = credited.get(&letter).copied().unwrap_or(0);
                let maximum = self.maximum_counts.entry(letter).or_insert(cap);
                *maximum = (*maximum).min(cap);
            } else {
                self.global_exclusions.insert(letter);
            }
        }

        if self
            .required_letters
            .iter()
            .any(|(letter, &min)| self.maximum_counts.get(letter).is_some_and(|&max| min > max))
        {
            log::warn!("feedback requires more copies of a letter than it allows");
            self.contradiction = true;
        }
    }

    /// Check whether `word` could still be the secret
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        if self.contradiction {
            return false;
        }

        for (i, &ch) in word.chars().iter().enumerate() {
            if self.positional_matches[i].is_some_and(|required| required != ch) {
                return false;
            }
            if self.positional_exclusions[i].contains(&ch) {
                return false;
            }
            if self.global_exclusions.contains(&ch) {
                return false;
            }
        }

        let has_required = self
            .required_letters
            .iter()
            .all(|(&letter, &min)| word.count_of(letter) >= min);

        has_required
            && self
                .maximum_counts
                .iter()
                .all(|(&letter, &max)| word.count_of(letter) <= max)
    }

    /// Letter fixed at a position, if any
    #[must_use]
    pub const fn positional_match(&self, position: usize) -> Option<u8> {
        self.positional_matches[position]
    }

    /// Letters known not to be at a position
    #[must_use]
    pub fn positional_exclusions(&self, position: usize) -> &FxHashSet<u8> {
        &self.positional_exclusions[position]
    }

    /// Minimum number of copies known for a letter, if it is required
    #[must_use]
    pub fn required_count(&self, letter: u8) -> Option<usize> {
        self.required_letters.get(&letter).copied()
    }

    #[must_use]
    pub fn is_required(&self, letter: u8) -> bool {
        self.required_letters.contains_key(&letter)
    }

    #[must_use]
    pub fn maximum_count(&self, letter: u8) -> Option<usize> {
        self.maximum_counts.get(&letter).copied()
    }

    #[must_use]
    pub fn is_excluded(&self, letter: u8) -> bool {
        self.global_exclusions.contains(&letter)
    }

    /// True when the recorded feedback cannot come from any single secret
    #[must_use]
    pub const fn is_contradictory(&self) -> bool {
        self.contradiction
    }
}

/// Ordered guess history plus the model derived from it
#[derive(Debug, Clone, Default)]
pub struct ConstraintTracker {
    history: Vec<(Word, Feedback)>,
    model: ConstraintModel,
}

impl ConstraintTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess and its feedback
    pub fn record(&mut self, guess: Word, feedback: Feedback) {
        self.model.apply(&guess, &feedback);
        self.history.push((guess, feedback));
    }

    /// Drop the most recent guess and rebuild the model from the rest
    ///
    /// Returns the removed entry, or `None` if nothing has been recorded.
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        let removed = self.history.pop()?;
        self.model = ConstraintModel::default();
        for (guess, feedback) in &self.history {
            self.model.apply(guess, feedback);
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.model = ConstraintModel::default();
    }

    #[must_use]
    pub const fn model(&self) -> &ConstraintModel {
        &self.model
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Whether the last recorded feedback was all matches
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_perfect())
    }
}
