//! Benchmark command
//!
//! Runs independent solver sessions over many secrets in parallel.

use crate::core::Word;
use crate::error::WordleError;
use crate::solver::{CandidateSet, SecretJudge, SolveOutcome, Solver, SolverState};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    /// Sample targets with this seed; take dictionary order when `None`
    pub seed: Option<u64>,
    pub tries: usize,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    /// Sessions that ended with no candidates left
    pub exhausted: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of wins
    pub distribution: HashMap<usize, usize>,
    pub hardest: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets from the dictionary
#[must_use]
pub fn select_targets(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            dictionary.choose_multiple(&mut rng, count).cloned().collect()
        }
        None => dictionary.iter().take(count).cloned().collect(),
    }
}

/// Run one solver session per target
///
/// Each session owns its solver state; only the scored dictionary is shared.
#[must_use]
pub fn run_benchmark(
    candidates: &CandidateSet,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<(&Word, Result<SolveOutcome, WordleError>)> = targets
        .par_iter()
        .map(|target| {
            let mut solver = Solver::new(candidates, config.tries);
            let mut judge = SecretJudge::new(target.clone());
            let outcome = solver.run(&mut judge);
            pb.inc(1);
            (target, outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut won = 0;
    let mut lost = 0;
    let mut exhausted = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut hardest = Vec::new();

    for (target, outcome) in outcomes {
        match outcome {
            Ok(SolveOutcome {
                state: SolverState::Won { rounds },
                ..
            }) => {
                won += 1;
                total_guesses += rounds;
                min_guesses = min_guesses.min(rounds);
                max_guesses = max_guesses.max(rounds);
                *distribution.entry(rounds).or_insert(0) += 1;
            }
            Ok(_) => {
                lost += 1;
                hardest.push(target.clone());
            }
            Err(e) => {
                log::debug!("{target}: {e}");
                exhausted += 1;
                hardest.push(target.clone());
            }
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        won,
        lost,
        exhausted,
        average_guesses: if won > 0 {
            total_guesses as f64 / won as f64
        } else {
            0.0
        },
        min_guesses: if won > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        hardest,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WordScorer;
    use crate::solver::DEFAULT_TRIES;
    use crate::wordlists::loader::{default_dictionary, default_letters};

    fn config(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: None,
            tries: DEFAULT_TRIES,
            show_progress: false,
        }
    }

    fn setup() -> (Vec<Word>, CandidateSet) {
        let stats = default_letters().unwrap();
        let dictionary = default_dictionary();
        let candidates = CandidateSet::new(&dictionary, &WordScorer::new(&stats)).unwrap();
        (dictionary, candidates)
    }

    #[test]
    fn benchmark_runs() {
        let (dictionary, candidates) = setup();
        let targets = select_targets(&dictionary, 20, None);
        let result = run_benchmark(&candidates, &targets, &config(20));

        assert_eq!(result.total_words, 20);
        assert_eq!(result.won + result.lost + result.exhausted, 20);
        // Every target is in the dictionary, so no session runs dry
        assert_eq!(result.exhausted, 0);
        assert!(result.max_guesses <= DEFAULT_TRIES);
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let (dictionary, candidates) = setup();
        let targets = select_targets(&dictionary, 15, Some(3));
        let result = run_benchmark(&candidates, &targets, &config(15));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.won);
        for &guess_count in result.distribution.keys() {
            assert!((1..=DEFAULT_TRIES).contains(&guess_count));
        }
        if result.won > 0 {
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
    }

    #[test]
    fn benchmark_counts_secrets_outside_dictionary() {
        let (_, candidates) = setup();
        let targets = vec![Word::new("zzzzz").unwrap(), Word::new("xxxxx").unwrap()];
        let result = run_benchmark(&candidates, &targets, &config(2));

        assert_eq!(result.won, 0);
        assert_eq!(result.hardest.len(), 2);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let (_, candidates) = setup();
        let result = run_benchmark(&candidates, &[], &config(0));

        assert_eq!(result.total_words, 0);
        assert_eq!(result.won, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn select_targets_seeded_is_reproducible() {
        let (dictionary, _) = setup();
        let a = select_targets(&dictionary, 10, Some(9));
        let b = select_targets(&dictionary, 10, Some(9));
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        assert!(a.iter().all(|w| dictionary.contains(w)));

        let first = select_targets(&dictionary, 3, None);
        assert_eq!(first, dictionary[..3].to_vec());
    }
}
