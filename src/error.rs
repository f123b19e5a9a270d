//! Game error types

use crate::core::WORD_LENGTH;
use crate::storage::RecordStatus;
use thiserror::Error;

/// Errors raised by the game engine and its collaborators
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Not enough letters: expected {WORD_LENGTH}, got {0}")]
    IncompleteGuess(usize),

    #[error("Not in word list: {0}")]
    UnknownWord(String),

    #[error("The game is already over")]
    GameAlreadyOver,

    #[error("The word list has not been loaded")]
    EmptyDictionary,

    #[error("Invalid challenge token: {0}")]
    Decode(String),

    #[error("Daily record for day {day} is already {stored}, cannot mark it {requested}")]
    RecordConflict {
        day: i64,
        stored: RecordStatus,
        requested: RecordStatus,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    /// Transient validation errors the player is simply re-prompted for
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::IncompleteGuess(_) | Self::UnknownWord(_) | Self::Decode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_guess_display() {
        let error = GameError::IncompleteGuess(3);
        assert_eq!(error.to_string(), "Not enough letters: expected 5, got 3");
    }

    #[test]
    fn record_conflict_display() {
        let error = GameError::RecordConflict {
            day: 20_000,
            stored: RecordStatus::Won,
            requested: RecordStatus::Lost,
        };
        assert_eq!(
            error.to_string(),
            "Daily record for day 20000 is already won, cannot mark it lost"
        );
    }

    #[test]
    fn user_recoverable_classification() {
        assert!(GameError::IncompleteGuess(2).is_user_recoverable());
        assert!(GameError::UnknownWord("XXXXX".to_string()).is_user_recoverable());
        assert!(GameError::Decode("bad".to_string()).is_user_recoverable());
        assert!(!GameError::GameAlreadyOver.is_user_recoverable());
        assert!(!GameError::EmptyDictionary.is_user_recoverable());
    }
}
