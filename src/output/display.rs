//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\nTurn {}: {} {}",
            step.round,
            colored_guess(&step.guess, &step.feedback),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Score:      {score:.2}");
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else if result.exhausted {
        println!(
            "{}",
            format!(
                "❌ No dictionary word fits after {} guesses",
                result.steps.len()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_words > 0 {
        result.won as f64 / result.total_words as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({win_rate:.1}%)",
        format!("{}", result.won).green()
    );
    println!("   Out of tries:     {}", format!("{}", result.lost).yellow());
    if result.exhausted > 0 {
        println!("   No candidates:    {}", format!("{}", result.exhausted).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut guess_counts: Vec<usize> = result.distribution.keys().copied().collect();
    guess_counts.sort_unstable();
    for guess_count in guess_counts {
        let count = result.distribution[&guess_count];
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n🧩 {}", "Unsolved:".bright_cyan().bold());
        let words: Vec<String> = result
            .hardest
            .iter()
            .take(20)
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("   {}", words.join(", "));
        if result.hardest.len() > 20 {
            println!("   ... and {} more", result.hardest.len() - 20);
        }
    }
}
