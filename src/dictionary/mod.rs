//! Word dictionary
//!
//! Holds the valid-guess set and the ordered solutions pool used for the
//! daily word and random picks. Read-only once built.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionaryLoader, LoadState};

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// How many leading words of a loaded list form the solutions pool
pub const SOLUTIONS_POOL_SIZE: usize = 200;

/// Daily word used when the solutions pool is empty
pub const DEFAULT_DAILY_WORD: Word = Word::from_upper_bytes(*b"APPLE");

/// Valid guesses plus the solutions pool drawn from them
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    valid: FxHashSet<Word>,
    words: Vec<Word>,
    solutions: Vec<Word>,
}

impl Dictionary {
    /// A dictionary with no words (the state before loading completes)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an ordered word sequence
    ///
    /// Entries are normalized to uppercase; anything that is not a 5-letter
    /// word is skipped and duplicates keep their first position. The first
    /// `pool_size` unique words become the solutions pool.
    pub fn from_words<I, S>(words: I, pool_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::empty();
        for word in words.into_iter().filter_map(|s| Word::new(s).ok()) {
            dictionary.insert(word);
        }
        dictionary.solutions = dictionary.words.iter().take(pool_size).cloned().collect();
        dictionary
    }

    /// Parse a line-delimited word list (`\n` or `\r\n`)
    #[must_use]
    pub fn from_lines(text: &str, pool_size: usize) -> Self {
        Self::from_words(text.lines(), pool_size)
    }

    /// Build from separate valid and solution lists
    ///
    /// Every solution is also accepted as a guess.
    pub fn with_solutions<I, J, S, T>(valid: I, solutions: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut dictionary = Self::from_words(valid, 0);
        for word in solutions.into_iter().filter_map(|s| Word::new(s).ok()) {
            dictionary.insert(word.clone());
            if !dictionary.solutions.contains(&word) {
                dictionary.solutions.push(word);
            }
        }
        dictionary
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS, SOLUTIONS_POOL_SIZE)
    }

    fn insert(&mut self, word: Word) {
        if self.valid.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Case-insensitive membership test against the full valid set
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Normalize `raw` and return it if it is a known word
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<Word> {
        Word::new(raw).ok().filter(|word| self.valid.contains(word))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Number of valid guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The ordered solutions pool
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Deterministic word for a calendar day: `solutions[day mod |solutions|]`
    ///
    /// Falls back to [`DEFAULT_DAILY_WORD`] when the pool is empty.
    #[must_use]
    pub fn pick_daily(&self, day: i64) -> Word {
        if self.solutions.is_empty() {
            return DEFAULT_DAILY_WORD;
        }
        let index = day.rem_euclid(self.solutions.len() as i64) as usize;
        self.solutions[index].clone()
    }

    /// Uniform random draw from the full valid set
    ///
    /// # Errors
    ///
    /// Returns `EmptyDictionary` if no words have been loaded.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, GameError> {
        self.words.choose(rng).cloned().ok_or(GameError::EmptyDictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["crane", "SLATE", "apple", "llama", "allow"], 3)
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_solutions_subset_of_valid() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.solutions().len(), SOLUTIONS_POOL_SIZE);
        for word in dictionary.solutions() {
            assert!(dictionary.contains(word), "{word} missing from valid set");
        }
    }

    #[test]
    fn is_valid_is_case_insensitive() {
        let dictionary = sample();
        assert!(dictionary.is_valid("crane"));
        assert!(dictionary.is_valid("CRANE"));
        assert!(dictionary.is_valid("Slate"));
        assert!(!dictionary.is_valid("zebra"));
        assert!(!dictionary.is_valid("cran"));
    }

    #[test]
    fn from_lines_handles_crlf_and_filters_length() {
        let dictionary = Dictionary::from_lines("crane\r\nslate\r\ntoolong\r\nabc\r\n\r\nCRANE\n", 10);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.solutions().len(), 2);
        assert!(dictionary.is_valid("slate"));
    }

    #[test]
    fn solutions_pool_is_leading_words() {
        let dictionary = sample();
        let pool: Vec<&str> = dictionary.solutions().iter().map(Word::text).collect();
        assert_eq!(pool, ["CRANE", "SLATE", "APPLE"]);
    }

    #[test]
    fn with_solutions_keeps_subset_invariant() {
        let dictionary = Dictionary::with_solutions(["crane", "slate"], ["apple", "crane"]);
        assert!(dictionary.is_valid("apple"));
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.solutions().len(), 2);
    }

    #[test]
    fn pick_daily_is_modular() {
        let dictionary = sample();
        assert_eq!(dictionary.pick_daily(0).text(), "CRANE");
        assert_eq!(dictionary.pick_daily(1).text(), "SLATE");
        assert_eq!(dictionary.pick_daily(5).text(), "APPLE");
        assert_eq!(dictionary.pick_daily(3), dictionary.pick_daily(0));
    }

    #[test]
    fn pick_daily_handles_negative_days() {
        let dictionary = sample();
        assert_eq!(dictionary.pick_daily(-1).text(), "APPLE");
    }

    #[test]
    fn pick_daily_falls_back_on_empty_pool() {
        let dictionary = Dictionary::empty();
        assert_eq!(dictionary.pick_daily(19_000), DEFAULT_DAILY_WORD);
        assert_eq!(DEFAULT_DAILY_WORD.text(), "APPLE");
    }

    #[test]
    fn pick_random_draws_from_valid_set() {
        let dictionary = sample();
        let mut rng = rand::rng();
        for _ in 0..20 {
            let word = dictionary.pick_random(&mut rng).unwrap();
            assert!(dictionary.contains(&word));
        }
    }

    #[test]
    fn pick_random_fails_when_empty() {
        let dictionary = Dictionary::empty();
        assert!(matches!(
            dictionary.pick_random(&mut rand::rng()),
            Err(GameError::EmptyDictionary)
        ));
    }
}
