//! Word lists and letter tables
//!
//! Provides the embedded defaults compiled into the binary and loaders for
//! user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{LETTERS, WORDS, WORDS_COUNT};
