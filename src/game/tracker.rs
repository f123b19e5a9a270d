//! Round tracker
//!
//! Owns the session and keyboard state, validates guesses against the
//! dictionary, and checkpoints daily progress. State transitions happen as
//! soon as a guess is evaluated; reveal animations never gate them.

use super::challenge::Challenge;
use super::session::{GameMode, Outcome, RoundState, Session};
use crate::core::{Feedback, KeyboardState, MAX_GUESSES, WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::storage::{DailyRecord, DailyStore, RecordStatus};
use rand::Rng;
use tracing::{debug, error, info, warn};

/// What the presentation layer receives for each accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Word,
    pub feedback: Feedback,
    pub state: RoundState,
}

impl GuessResult {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// Per-session state machine: `AwaitingGuess(row)` until `Won(row)` or `Lost`
#[derive(Debug)]
pub struct RoundTracker<'a> {
    dictionary: &'a Dictionary,
    session: Session,
    keyboard: KeyboardState,
    daily: Option<DailyStore>,
}

impl<'a> RoundTracker<'a> {
    /// Start a fresh, unpersisted round
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, secret: Word, mode: GameMode) -> Self {
        info!(mode = %mode.banner(), "Starting new round");
        Self {
            dictionary,
            session: Session::new(secret, mode),
            keyboard: KeyboardState::new(),
            daily: None,
        }
    }

    /// Start a round against a decoded challenge token
    #[must_use]
    pub fn challenge(dictionary: &'a Dictionary, challenge: Challenge) -> Self {
        Self::new(
            dictionary,
            challenge.word,
            GameMode::Challenge {
                created_by: challenge.created_by,
            },
        )
    }

    /// Start a round with a random secret
    ///
    /// # Errors
    ///
    /// Returns `EmptyDictionary` if no words are loaded.
    pub fn random<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Result<Self, GameError> {
        let secret = dictionary.pick_random(rng)?;
        Ok(Self::new(dictionary, secret, GameMode::Random))
    }

    /// Start or resume the daily round for `day`
    ///
    /// An existing record is replayed through the evaluator to rebuild the
    /// board and keyboard; nothing is appended while replaying.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read. A record that
    /// no longer parses is logged and the day starts fresh; the first guess
    /// overwrites it.
    pub fn daily(dictionary: &'a Dictionary, day: i64, store: DailyStore) -> Result<Self, GameError> {
        let secret = dictionary.pick_daily(day);
        let record = match store.load(day) {
            Ok(record) => record,
            Err(GameError::Serialization(e)) => {
                warn!(day, error = %e, "Unreadable daily record, starting fresh");
                None
            }
            Err(e) => return Err(e),
        };

        let mut tracker = Self::new(dictionary, secret, GameMode::Daily { day });
        tracker.daily = Some(store);
        if let Some(record) = record {
            tracker.resume(&record);
        }
        Ok(tracker)
    }

    /// Replay a stored record, then reflect its stored final status
    fn resume(&mut self, record: &DailyRecord) {
        for raw in &record.guesses {
            if self.session.state().is_terminal() {
                warn!(day = record.day, guess = %raw, "Ignoring stored guess after round end");
                break;
            }
            match Word::new(raw) {
                Ok(guess) => {
                    self.apply(guess);
                }
                Err(e) => warn!(day = record.day, guess = %raw, error = %e, "Skipping invalid stored guess"),
            }
        }

        let replayed = self.session.state();
        match (record.status, replayed) {
            (status, _) if status.is_final() && self.session.guesses().is_empty() => {
                warn!(day = record.day, %status, "Ignoring final status with no stored guesses");
            }
            (RecordStatus::Won, RoundState::Won(_)) | (RecordStatus::Lost, RoundState::Lost) => {}
            (RecordStatus::Won, _) => {
                warn!(day = record.day, ?replayed, "Stored win does not match replay");
                let row = self.session.guesses().len().saturating_sub(1);
                self.session.conclude(RoundState::Won(row));
            }
            (RecordStatus::Lost, _) => {
                warn!(day = record.day, ?replayed, "Stored loss does not match replay");
                self.session.conclude(RoundState::Lost);
            }
            (RecordStatus::InProgress, state) if state.is_terminal() => {
                // Guesses were saved but the round end was not
                self.finalize_daily();
            }
            (RecordStatus::InProgress, _) => {}
        }

        info!(
            day = record.day,
            guesses = self.session.guesses().len(),
            state = ?self.session.state(),
            "Resumed daily round"
        );
    }

    /// Submit a raw guess
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` if the round has ended
    /// - `IncompleteGuess` if fewer than 5 letters were entered
    /// - `UnknownWord` if the guess is not in the dictionary
    ///
    /// Validation errors leave the session untouched. Persistence failures
    /// are logged and do not undo the guess.
    pub fn submit(&mut self, raw: &str) -> Result<GuessResult, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let raw = raw.trim();
        let letters = raw.chars().count();
        if letters < WORD_LENGTH {
            return Err(GameError::IncompleteGuess(letters));
        }

        let guess = self
            .dictionary
            .lookup(raw)
            .ok_or_else(|| GameError::UnknownWord(raw.to_uppercase()))?;

        let (feedback, state) = self.apply(guess.clone());
        debug!(guess = %guess, feedback = %feedback.to_emoji(), ?state, "Guess evaluated");

        self.checkpoint(&guess);
        if state.is_terminal() {
            info!(state = ?state, secret = %self.session.secret(), "Round over");
            self.finalize_daily();
        }

        Ok(GuessResult {
            guess,
            feedback,
            state,
        })
    }

    /// Evaluate and record a guess without any validation or persistence
    fn apply(&mut self, guess: Word) -> (Feedback, RoundState) {
        let feedback = Feedback::evaluate(&guess, self.session.secret());
        self.keyboard.apply(&guess, &feedback);
        let state = self.session.record(guess, feedback);
        (feedback, state)
    }

    fn daily_day(&self) -> Option<i64> {
        match self.session.mode() {
            GameMode::Daily { day } => Some(*day),
            GameMode::Challenge { .. } | GameMode::Random => None,
        }
    }

    fn checkpoint(&self, guess: &Word) {
        let (Some(store), Some(day)) = (&self.daily, self.daily_day()) else {
            return;
        };
        if let Err(e) = store.append_guess(day, guess) {
            log_store_error(day, &e);
        }
    }

    fn finalize_daily(&self) {
        let (Some(store), Some(day)) = (&self.daily, self.daily_day()) else {
            return;
        };
        let status = match self.session.state() {
            RoundState::Won(_) => RecordStatus::Won,
            RoundState::Lost => RecordStatus::Lost,
            RoundState::AwaitingGuess(_) => return,
        };
        if let Err(e) = store.finalize(day, status) {
            log_store_error(day, &e);
        }
    }

    /// Zero-based row the next guess goes into (or the row the round ended on)
    #[must_use]
    pub const fn current_row(&self) -> usize {
        match self.session.state() {
            RoundState::AwaitingGuess(row) | RoundState::Won(row) => row,
            RoundState::Lost => MAX_GUESSES - 1,
        }
    }

    /// Submitted guesses with their feedback, oldest first
    pub fn history(&self) -> impl Iterator<Item = (&Word, &Feedback)> {
        self.session
            .guesses()
            .iter()
            .zip(self.session.feedback())
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.session.state().is_terminal()
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.session.state()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.session.outcome()
    }
}

fn log_store_error(day: i64, e: &GameError) {
    if matches!(e, GameError::RecordConflict { .. }) {
        warn!(day, error = %e, "Daily record conflict");
    } else {
        error!(day, error = %e, "Failed to checkpoint daily record");
    }
}
