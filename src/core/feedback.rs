//! Wordle feedback calculation and representation
//!
//! Feedback is one `LetterClass` per letter position of a guess:
//! - Absent (letter not in the secret, or every occurrence already claimed)
//! - Present (letter in the secret, wrong position)
//! - Correct (letter in the correct position)

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
///
/// The derived ordering is the display precedence: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterClass {
    Absent,
    Present,
    Correct,
}

impl LetterClass {
    /// Share-text glyph for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

impl fmt::Display for LetterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Feedback for a Wordle guess, one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterClass; WORD_LENGTH]);

impl Feedback {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([LetterClass::Correct; WORD_LENGTH]);

    /// Create feedback from explicit classifications
    #[inline]
    #[must_use]
    pub const fn new(marks: [LetterClass; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Per-position classifications in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterClass; WORD_LENGTH] {
        &self.0
    }

    /// Classification at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterClass {
        self.0[position]
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&mark| mark == LetterClass::Correct)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Pure and deterministic. Dictionary membership is the caller's concern.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark displaced letters, claiming one occurrence each from
    ///    what is left of the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_challenge::core::{Feedback, LetterClass::*, Word};
    ///
    /// let guess = Word::new("alley").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.marks(), &[Correct, Present, Absent, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterClass::Absent; WORD_LENGTH];
        let mut secret_available = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterClass::Correct;

                if let Some(count) = secret_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: displaced letters from what remains unclaimed
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterClass::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterClass::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterClass::Correct)
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterClass::Present)
    }

    fn count(&self, class: LetterClass) -> usize {
        self.0.iter().filter(|&&mark| mark == class).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬛/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_challenge::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬛🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut marks = [LetterClass::Absent; WORD_LENGTH];
        for (slot, ch) in marks.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterClass::Correct,
                'Y' | 'y' | '🟨' => LetterClass::Present,
                '-' | '_' | '⬛' | '⬜' => LetterClass::Absent,
                _ => return None,
            };
        }

        Some(Self(marks))
    }

    /// Convert feedback to an emoji row such as "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
