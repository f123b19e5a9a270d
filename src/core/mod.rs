//! Core domain types for Wordle
//!
//! Pure, testable types: words, per-letter feedback, and the keyboard
//! aggregate. Nothing here performs I/O or holds session state.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterClass};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use word::{WORD_LENGTH, Word, WordError};

/// Number of guesses a player gets per round
pub const MAX_GUESSES: usize = 6;
