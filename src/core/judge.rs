//! Judging a guess against the secret word

use super::feedback::{Feedback, FeedbackSymbol};
use super::word::{WORD_LENGTH, Word};

/// Evaluate `guess` against `secret`
///
/// Implements the game's exact feedback rules, including repeated letters.
///
/// # Algorithm
/// 1. First pass: mark exact position matches and remove them from a pool built
///    from the secret's letter counts
/// 2. Second pass: mark present-but-misplaced letters while the pool still holds
///    a copy of that letter; everything else is absent
///
/// # Examples
/// ```
/// use wordle_sieve::core::{Feedback, Word, evaluate};
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
///
/// assert_eq!(evaluate(&secret, &guess), Feedback::parse("-GGYG").unwrap());
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Feedback {
    let mut result = [FeedbackSymbol::Absent; WORD_LENGTH];
    let mut secret_available = secret.char_counts();

    // Allow: Index needed to access guess[i], secret[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == secret.char_at(i) {
            result[i] = FeedbackSymbol::Match;
            if let Some(count) = secret_available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == FeedbackSymbol::Match {
            continue;
        }
        if let Some(count) = secret_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = FeedbackSymbol::Present;
            *count -= 1;
        }
    }

    Feedback::new(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackSymbol::{Absent, Match, Present};

    fn judge(secret: &str, guess: &str) -> Feedback {
        evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn all_absent() {
        assert_eq!(judge("fghij", "abcde"), Feedback::new([Absent; 5]));
    }

    #[test]
    fn identical_words_are_perfect() {
        for word in ["crane", "slate", "audio", "llama", "geese"] {
            assert!(judge(word, word).is_perfect());
        }
    }

    #[test]
    fn crane_vs_trace() {
        assert_eq!(
            judge("crane", "trace"),
            Feedback::new([Absent, Match, Match, Present, Match])
        );
    }

    #[test]
    fn repeated_guess_letter_limited_by_secret() {
        // ALLOY has two L's and one A; LLAMA has two L's and two A's
        let feedback = judge("alloy", "llama");
        assert_eq!(
            feedback,
            Feedback::new([Present, Match, Present, Absent, Absent])
        );
    }

    #[test]
    fn match_consumes_before_present() {
        // ROBOT vs FLOOR: second O is a match, first O takes the other O as present
        assert_eq!(
            judge("floor", "robot"),
            Feedback::new([Present, Present, Absent, Match, Absent])
        );
    }

    #[test]
    fn extra_copies_are_absent() {
        // SPEED vs ABIDE: only one E in the secret
        assert_eq!(
            judge("abide", "speed"),
            Feedback::new([Absent, Absent, Present, Absent, Present])
        );
    }

    #[test]
    fn match_and_present_never_exceed_secret_count() {
        let words = ["geese", "eerie", "speed", "erase", "abbey", "sassy", "mamma", "llama"];
        for secret in words {
            for guess in words {
                let s = Word::new(secret).unwrap();
                let g = Word::new(guess).unwrap();
                let feedback = evaluate(&s, &g);

                let equal_positions = (0..5).filter(|&i| s.char_at(i) == g.char_at(i)).count();
                assert_eq!(feedback.count_matches(), equal_positions);

                for letter in g.distinct_letters() {
                    let credited = (0..5)
                        .filter(|&i| g.char_at(i) == letter && feedback.at(i) != Absent)
                        .count();
                    assert!(credited <= s.count_of(letter), "{secret} vs {guess}");
                }
            }
        }
    }
}
