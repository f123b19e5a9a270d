//! Word list loading utilities
//!
//! The dictionary is loaded once, before any guess can be validated. The
//! loader tracks that one-shot load so a failed fetch can be retried.

use super::{Dictionary, SOLUTIONS_POOL_SIZE};
use crate::error::GameError;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Load a dictionary from a line-delimited word file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_challenge::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt", 200).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, pool_size: usize) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_lines(&content, pool_size))
}

/// Progress of the one-shot dictionary load
#[derive(Debug, Clone)]
pub enum LoadState {
    Pending,
    Ready(Dictionary),
    Failed(String),
}

/// Gatekeeper for the dictionary: nothing can validate a guess until it is `Ready`
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    state: LoadState,
    pool_size: usize,
    attempts: u32,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new(SOLUTIONS_POOL_SIZE)
    }
}

impl DictionaryLoader {
    #[must_use]
    pub const fn new(pool_size: usize) -> Self {
        Self {
            state: LoadState::Pending,
            pool_size,
            attempts: 0,
        }
    }

    /// Run `fetch` and parse its output, unless a previous attempt already succeeded
    ///
    /// Calling this again after a failure is the retry path.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if `fetch` fails, or `EmptyDictionary` if the fetched
    /// text holds no usable words. The loader stays retryable in both cases.
    pub fn load_with<F>(&mut self, fetch: F) -> Result<&Dictionary, GameError>
    where
        F: FnOnce() -> io::Result<String>,
    {
        if !matches!(self.state, LoadState::Ready(_)) {
            self.attempts += 1;
            match fetch() {
                Ok(text) => {
                    let dictionary = Dictionary::from_lines(&text, self.pool_size);
                    if dictionary.is_empty() {
                        warn!(attempt = self.attempts, "Word list contained no usable words");
                        self.state = LoadState::Failed("no usable words".to_string());
                        return Err(GameError::EmptyDictionary);
                    }
                    info!(
                        words = dictionary.len(),
                        solutions = dictionary.solutions().len(),
                        "Dictionary loaded"
                    );
                    self.state = LoadState::Ready(dictionary);
                }
                Err(e) => {
                    warn!(attempt = self.attempts, error = %e, "Word list fetch failed");
                    self.state = LoadState::Failed(e.to_string());
                    return Err(GameError::Storage(e));
                }
            }
        }
        self.dictionary()
    }

    /// Install an already-built dictionary
    pub fn install(&mut self, dictionary: Dictionary) {
        self.state = LoadState::Ready(dictionary);
    }

    /// The loaded dictionary
    ///
    /// # Errors
    ///
    /// Returns `EmptyDictionary` until a load has succeeded.
    pub fn dictionary(&self) -> Result<&Dictionary, GameError> {
        match &self.state {
            LoadState::Ready(dictionary) => Ok(dictionary),
            LoadState::Pending | LoadState::Failed(_) => Err(GameError::EmptyDictionary),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// Number of fetch attempts made so far
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}
