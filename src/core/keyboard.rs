//! On-screen keyboard state
//!
//! Tracks the best classification seen for each letter across a session.
//! Merging is monotonic: a letter never drops below what it has already shown.

use super::feedback::{Feedback, LetterClass};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Keyboard rows in QWERTY order, used by front ends to lay out keys
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Mapping from letter to best-seen classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    marks: FxHashMap<u8, LetterClass>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `class` for `letter` unless a higher-precedence class is already held
    pub fn update(&mut self, letter: u8, class: LetterClass) {
        let slot = self
            .marks
            .entry(letter.to_ascii_uppercase())
            .or_insert(class);
        if class > *slot {
            *slot = class;
        }
    }

    /// Merge every letter of an evaluated guess
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &class) in guess.chars().iter().zip(feedback.marks()) {
            self.update(letter, class);
        }
    }

    /// Best classification seen for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn state_of(&self, letter: u8) -> Option<LetterClass> {
        self.marks.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Forget everything (only when a brand-new session starts)
    pub fn reset(&mut self) {
        self.marks.clear();
    }

    /// Number of letters with a recorded classification
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
