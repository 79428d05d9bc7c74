//! Simple line-based game
//!
//! The player types guesses against a secret word; each guess is echoed with
//! coloured feedback.

use crate::error::WordleError;
use crate::game::{GameSession, SessionStatus};
use crate::output::formatters::colored_guess;
use crate::solver::CandidateSet;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Play a session by reading guesses from `input`
///
/// Typing `hint` asks the solver for its best guess when `hints` is given;
/// `quit` or end of input abandons the game.
///
/// # Errors
///
/// Returns [`WordleError::Aborted`] if the player quits, or an I/O error if
/// reading or writing fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession,
    hints: Option<&CandidateSet>,
    input: &mut R,
    out: &mut W,
) -> Result<SessionStatus, WordleError> {
    writeln!(
        out,
        "Guess the five-letter word in {} tries. Type 'quit' to give up{}.\n",
        session.tries(),
        if hints.is_some() { ", 'hint' for a suggestion" } else { "" }
    )?;

    while !session.is_over() {
        let used = session.tries() - session.remaining_tries();
        let line = prompt(
            &format!("Attempt {}/{}", used + 1, session.tries()),
            input,
            out,
        )?;

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Err(WordleError::Aborted),
            "hint" | "?" => {
                show_hint(session, hints, out)?;
                continue;
            }
            _ => {}
        }

        match session.guess(&line) {
            Ok(feedback) => {
                if let Some((word, _)) = session.history().last() {
                    writeln!(out, "  {}  {}", colored_guess(word, &feedback), feedback.to_emoji())?;
                }
            }
            Err(e) if e.is_recoverable() => {
                writeln!(out, "{}", format!("5 letters, please! ({e})").red())?;
            }
            Err(e) => return Err(e),
        }
    }

    if session.status() == SessionStatus::Won {
        writeln!(
            out,
            "\n{}",
            format!("You win! Solved in {} tries.", session.history().len())
                .green()
                .bold()
        )?;
    } else {
        writeln!(
            out,
            "\n{} The word was {}.",
            "You lose!".red().bold(),
            session.secret().text().to_uppercase().bold()
        )?;
    }

    Ok(session.status())
}

fn show_hint<W: Write>(
    session: &GameSession,
    hints: Option<&CandidateSet>,
    out: &mut W,
) -> Result<(), WordleError> {
    let Some(candidates) = hints else {
        writeln!(out, "No hints in this game.")?;
        return Ok(());
    };

    let solver = session.solver_for(candidates)?;
    match solver.next_guess() {
        Ok(word) => writeln!(
            out,
            "Hint: {} ({} candidates left)",
            word.text().to_uppercase().bright_cyan(),
            solver.remaining().len()
        )?,
        Err(WordleError::EmptyCandidateSet) => {
            writeln!(out, "No dictionary word fits the feedback so far.")?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Read one trimmed line after printing a prompt
///
/// # Errors
///
/// Returns [`WordleError::Aborted`] at end of input.
pub(crate) fn prompt<R: BufRead, W: Write>(
    text: &str,
    input: &mut R,
    out: &mut W,
) -> Result<String, WordleError> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(WordleError::Aborted);
    }
    Ok(line.trim().to_string())
}
