//! Wordle Sieve
//!
//! A five-letter word game with a feedback-driven solver. Each round's feedback
//! narrows a scored dictionary, and the solver always guesses the highest
//! scoring word that is still consistent with everything seen so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::{Word, evaluate};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let feedback = evaluate(&secret, &guess);
//! assert_eq!(feedback.to_string(), "-GGYG");
//! ```

// Core domain types
pub mod core;

// Letter weights and word scoring
pub mod scoring;

// Constraint tracking, candidate filtering and the solver loop
pub mod solver;

// Game sessions against a secret word
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod error;
pub mod logging;

pub use error::WordleError;
