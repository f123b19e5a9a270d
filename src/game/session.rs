//! Session state for a single round

use crate::core::{Feedback, MAX_GUESSES, Word};
use chrono::{DateTime, Utc};
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days since the Unix epoch (UTC) for `now`
#[must_use]
pub fn day_index(now: DateTime<Utc>) -> i64 {
    now.timestamp().div_euclid(SECONDS_PER_DAY)
}

/// Day index for the current moment
#[must_use]
pub fn today() -> i64 {
    day_index(Utc::now())
}

/// Where the secret came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMode {
    /// Shared puzzle derived from the day index; progress is persisted
    Daily { day: i64 },
    /// Secret chosen by another player and shared as a token
    Challenge { created_by: String },
    /// Secret drawn at random from the dictionary
    Random,
}

impl GameMode {
    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Self::Daily { .. })
    }

    /// Heading shown above the board
    #[must_use]
    pub fn banner(&self) -> String {
        match self {
            Self::Daily { .. } => "Daily Challenge".to_string(),
            Self::Challenge { created_by } => format!("{created_by} challenged you"),
            Self::Random => "Random Word".to_string(),
        }
    }
}

/// Round progression
///
/// `Won(row)` carries the zero-based row of the winning guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess(usize),
    Won(usize),
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess(_))
    }
}

/// Final result of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    pub guesses_used: usize,
    pub secret: Word,
}

impl Outcome {
    /// Score as shown in the share text: `"3/6"` or `"X/6"`
    #[must_use]
    pub fn score(&self) -> String {
        if self.won {
            format!("{}/{MAX_GUESSES}", self.guesses_used)
        } else {
            format!("X/{MAX_GUESSES}")
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.won {
            write!(f, "Solved {} in {}", self.secret, self.score())
        } else {
            write!(f, "Out of guesses, the word was {}", self.secret)
        }
    }
}

/// The live game instance, owned by the round tracker
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    mode: GameMode,
    guesses: Vec<Word>,
    feedback: Vec<Feedback>,
    state: RoundState,
}

impl Session {
    #[must_use]
    pub const fn new(secret: Word, mode: GameMode) -> Self {
        Self {
            secret,
            mode,
            guesses: Vec::new(),
            feedback: Vec::new(),
            state: RoundState::AwaitingGuess(0),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn mode(&self) -> &GameMode {
        &self.mode
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Feedback for each submitted guess, parallel to [`Session::guesses`]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// Record an evaluated guess and advance the state machine
    pub(crate) fn record(&mut self, guess: Word, feedback: Feedback) -> RoundState {
        let row = self.guesses.len();
        let won = guess == self.secret;
        self.guesses.push(guess);
        self.feedback.push(feedback);

        self.state = if won {
            RoundState::Won(row)
        } else if row + 1 == MAX_GUESSES {
            RoundState::Lost
        } else {
            RoundState::AwaitingGuess(row + 1)
        };
        self.state
    }

    /// Force a terminal state (used when a stored daily result says so)
    pub(crate) fn conclude(&mut self, state: RoundState) {
        self.state = state;
    }

    /// The final result once the round has ended
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let won = match self.state {
            RoundState::AwaitingGuess(_) => return None,
            RoundState::Won(_) => true,
            RoundState::Lost => false,
        };
        Some(Outcome {
            won,
            guesses_used: match self.state {
                RoundState::Won(row) => row + 1,
                _ => self.guesses.len(),
            },
            secret: self.secret.clone(),
        })
    }
}
