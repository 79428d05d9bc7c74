//! Assisted play
//!
//! The player plays a game elsewhere; the solver suggests each guess and the
//! player relays the feedback they were shown.

use super::simple::prompt;
use crate::core::Feedback;
use crate::error::WordleError;
use crate::output::formatters::colored_guess;
use crate::solver::{CandidateSet, Solver, SolverState};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the assistant loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
/// Quitting or reaching end of input ends the loop normally.
#[allow(clippy::too_many_lines)] // Interactive loop with command handling
pub fn run_assist<R: BufRead, W: Write>(
    candidates: &CandidateSet,
    tries: usize,
    input: &mut R,
    out: &mut W,
) -> Result<(), WordleError> {
    writeln!(out, "\nI'll suggest guesses ranked by letter frequency.")?;
    writeln!(out, "After each guess, enter the feedback you got:\n")?;
    writeln!(out, "  - G/g/🟩 for a letter in the right spot")?;
    writeln!(out, "  - Y/y/🟨 for a letter in the word but elsewhere")?;
    writeln!(out, "  - -/_/⬜ for a letter not in the word")?;
    writeln!(out, "  - or 'win' if the guess was right\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game, 'undo' to take back a guess\n")?;

    let mut solver = Solver::new(candidates, tries);

    loop {
        match solver.state() {
            SolverState::Won { rounds } => {
                writeln!(
                    out,
                    "{}",
                    format!("Solved in {rounds} {}!", if rounds == 1 { "guess" } else { "guesses" })
                        .green()
                        .bold()
                )?;
                if !ask_new_game(&mut solver, input, out)? {
                    return Ok(());
                }
                continue;
            }
            SolverState::Lost { rounds } => {
                writeln!(out, "{}", format!("Out of tries after {rounds} guesses.").red())?;
                if !ask_new_game(&mut solver, input, out)? {
                    return Ok(());
                }
                continue;
            }
            SolverState::InProgress { .. } => {}
        }

        let guess = match solver.next_guess() {
            Ok(guess) => guess.clone(),
            Err(WordleError::EmptyCandidateSet) => {
                writeln!(out, "{}", "No candidates remain! The feedback may be incorrect.".red())?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
                match read_command(input, out, "Command")?.as_str() {
                    "undo" | "u" => report_undo(&mut solver, out)?,
                    "new" | "n" => start_new(&mut solver, out)?,
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => {}
                }
                continue;
            }
            Err(e) => return Err(e),
        };

        let remaining = solver.remaining();
        let round = solver.state().rounds() + 1;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(out, "Turn {round}: {} candidates remaining", remaining.len())?;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "\nSuggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        )?;
        if let Some(score) = remaining.score_of(&guess) {
            writeln!(out, "   Letter score:   {score:.2}")?;
        }
        if remaining.len() <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for word in remaining.words() {
                writeln!(out, "  • {}", word.text().to_uppercase())?;
            }
        }
        writeln!(out)?;

        let feedback = loop {
            let command = read_command(input, out, "Enter feedback (G/Y/-, 'win', or command)")?;
            match command.as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(out, "\nThanks for playing!\n")?;
                    return Ok(());
                }
                "new" | "n" => {
                    start_new(&mut solver, out)?;
                    break None;
                }
                "undo" | "u" => {
                    report_undo(&mut solver, out)?;
                    break None;
                }
                "win" | "correct" | "yes" | "solved" => break Some(Feedback::PERFECT),
                text => match Feedback::parse(text) {
                    Ok(feedback) => break Some(feedback),
                    Err(e) => writeln!(out, "{}\n", e.to_string().red())?,
                },
            }
        };

        if let Some(feedback) = feedback {
            let report = solver.observe(guess, feedback)?;
            writeln!(
                out,
                "  {}  {} → {} candidates\n",
                colored_guess(&report.guess, &report.feedback),
                report.candidates_before,
                report.candidates_after
            )?;
        }
    }
}

fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<String, WordleError> {
    match prompt(text, input, out) {
        Ok(line) => Ok(line.to_lowercase()),
        // End of input behaves like quit
        Err(WordleError::Aborted) => Ok("quit".to_string()),
        Err(e) => Err(e),
    }
}

fn ask_new_game<R: BufRead, W: Write>(
    solver: &mut Solver<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<bool, WordleError> {
    match read_command(input, out, "Play again? (yes/no)")?.as_str() {
        "yes" | "y" | "new" | "n" => {
            start_new(solver, out)?;
            Ok(true)
        }
        "undo" | "u" => {
            report_undo(solver, out)?;
            Ok(true)
        }
        _ => {
            writeln!(out, "\nThanks for playing!\n")?;
            Ok(false)
        }
    }
}

fn start_new<W: Write>(solver: &mut Solver<'_>, out: &mut W) -> Result<(), WordleError> {
    solver.reset();
    writeln!(out, "\nNew game started!\n")?;
    Ok(())
}

fn report_undo<W: Write>(solver: &mut Solver<'_>, out: &mut W) -> Result<(), WordleError> {
    if solver.undo() {
        writeln!(out, "Undone! Back to turn {}\n", solver.state().rounds() + 1)?;
    } else {
        writeln!(out, "Nothing to undo!\n")?;
    }
    Ok(())
}
