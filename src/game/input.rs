//! Input dispatcher
//!
//! Turns discrete key events into edits of the pending row and submissions to
//! the round tracker, independent of where the keys come from.

use super::tracker::{GuessResult, RoundTracker};
use crate::core::WORD_LENGTH;
use crate::error::GameError;

/// A discrete input event from any front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    LetterPressed(char),
    BackspacePressed,
    EnterPressed,
}

/// What a dispatched event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The pending row changed (or stayed full)
    Buffered,
    /// A guess was accepted and evaluated
    Submitted(GuessResult),
    /// The event was dropped (reveal in flight, round over, or not a letter)
    Ignored,
}

/// Pending-row buffer plus the input-suppression flag
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    buffer: String,
    reveal_in_flight: bool,
}

impl InputDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one event
    ///
    /// # Errors
    ///
    /// Propagates `submit` errors on Enter. The pending row is kept intact so
    /// the player can correct it.
    pub fn dispatch(
        &mut self,
        tracker: &mut RoundTracker<'_>,
        event: InputEvent,
    ) -> Result<DispatchOutcome, GameError> {
        if self.reveal_in_flight {
            return Ok(DispatchOutcome::Ignored);
        }

        match event {
            InputEvent::LetterPressed(letter) => {
                if tracker.is_terminal() || !letter.is_ascii_alphabetic() {
                    return Ok(DispatchOutcome::Ignored);
                }
                if self.buffer.len() < WORD_LENGTH {
                    self.buffer.push(letter.to_ascii_uppercase());
                }
                Ok(DispatchOutcome::Buffered)
            }
            InputEvent::BackspacePressed => {
                if tracker.is_terminal() {
                    return Ok(DispatchOutcome::Ignored);
                }
                self.buffer.pop();
                Ok(DispatchOutcome::Buffered)
            }
            InputEvent::EnterPressed => {
                let result = tracker.submit(&self.buffer)?;
                self.buffer.clear();
                Ok(DispatchOutcome::Submitted(result))
            }
        }
    }

    /// Letters typed into the current row so far
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Suppress input while a reveal animation runs
    pub const fn begin_reveal(&mut self) {
        self.reveal_in_flight = true;
    }

    pub const fn end_reveal(&mut self) {
        self.reveal_in_flight = false;
    }

    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        self.reveal_in_flight
    }

    /// Drop the pending row and any suppression (new session)
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.reveal_in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;
    use crate::game::{GameMode, RoundState};

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["apple", "crane", "slate"], 3)
    }

    fn type_word(
        dispatcher: &mut InputDispatcher,
        tracker: &mut RoundTracker<'_>,
        word: &str,
    ) {
        for letter in word.chars() {
            dispatcher
                .dispatch(tracker, InputEvent::LetterPressed(letter))
                .unwrap();
        }
    }

    #[test]
    fn letters_fill_buffer_up_to_word_length() {
        let dict = dictionary();
        let mut tracker = RoundTracker::new(&dict, Word::new("apple").unwrap(), GameMode::Random);
        let mut dispatcher = InputDispatcher::new();

        type_word(&mut dispatcher, &mut tracker, "cranes");
        assert_eq!(dispatcher.buffer(), "CRANE");
    }

    #[test]
    fn non_letters_are_ignored() {
        let dict = dictionary();
        let mut tracker = RoundTracker::new(&dict, Word::new("apple").unwrap(), GameMode::Random);
        let mut dispatcher = InputDispatcher::new();

        let outcome = dispatcher
            .dispatch(&mut tracker, InputEvent::LetterPressed('7'))
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Ignored);
        assert_eq!(dispatcher.buffer(), "");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let dict = dictionary();
        let mut tracker = RoundTracker::new(&dict, Word::new("apple").unwrap(), GameMode::Random);
        let mut dispatcher = InputDispatcher::new();

        type_word(&mut dispatcher, &mut tracker, "cra");
        dispatcher
            .dispatch(&mut tracker, InputEvent::BackspacePressed)
            .unwrap();
        assert_eq!(dispatcher.buffer(), "CR");
    }

    #[test]
    fn enter_submits_and_clears() {
        let dict = dictionary();
        let mut tracker = RoundTracker::new(&dict, Word::new("apple").unwrap(), GameMode::Random);
        let mut dispatcher = InputDispatcher::new();

        type_word(&mut dispatcher, &mut tracker, "crane");
        let outcome = dispatcher
            .dispatch(&mut tracker, InputEvent::EnterPressed)
            .unwrap();

        let DispatchOutcome::Submitted(result) = outcome else {
            panic!("expected a submission, got {outcome:?}");
        };
        assert_eq!(result.state, RoundState::AwaitingGuess(1));
        assert_eq!(dispatcher.buffer(), "");
    }

    #[test]
    fn rejected_enter_keeps_buffer() {
        let dict = dictionary();
        let mut tracker = RoundTracker::new(&dict, Word::new("apple").unwrap(), GameMode::Random);
        let mut dispatcher = InputDispatcher::new();

        type_word(&mut dispatcher, &mut tracker, "cra");
        assert!(matches!(
            dispatcher.dispatch(&mut tracker, InputEvent::EnterPressed),
            Err(GameError::IncompleteGuess(3))
        ));
        assert_eq!(dispatcher.buffer(), "CRA");
    }

    #[test]
    fn suppressed_input_is_ignored() {
        let dict = dictionary();
        let mut tracker = RoundTracker::new(&dict, Word::new("apple").unwrap(), GameMode::Random);
        let mut dispatcher = InputDispatcher::new();

        dispatcher.begin_reveal();
        for event in [
            InputEvent::LetterPressed('a'),
            InputEvent::BackspacePressed,
            InputEvent::EnterPressed,
        ] {
            assert_eq!(
                dispatcher.dispatch(&mut tracker, event).unwrap(),
                DispatchOutcome::Ignored
            );
        }
        dispatcher.end_reveal();
        assert_eq!(
            dispatcher
                .dispatch(&mut tracker, InputEvent::LetterPressed('a'))
                .unwrap(),
            DispatchOutcome::Buffered
        );
    }

    #[test]
    fn after_round_end_letters_ignored_enter_errors() {
        let dict = dictionary();
        let mut tracker = RoundTracker::new(&dict, Word::new("apple").unwrap(), GameMode::Random);
        let mut dispatcher = InputDispatcher::new();

        type_word(&mut dispatcher, &mut tracker, "apple");
        dispatcher
            .dispatch(&mut tracker, InputEvent::EnterPressed)
            .unwrap();

        assert_eq!(
            dispatcher
                .dispatch(&mut tracker, InputEvent::LetterPressed('c'))
                .unwrap(),
            DispatchOutcome::Ignored
        );
        assert!(matches!(
            dispatcher.dispatch(&mut tracker, InputEvent::EnterPressed),
            Err(GameError::GameAlreadyOver)
        ));
    }
}
