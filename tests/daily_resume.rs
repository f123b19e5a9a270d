//! End-to-end daily flow against the file-backed store

use wordle_challenge::core::LetterClass;
use wordle_challenge::dictionary::Dictionary;
use wordle_challenge::game::{GameMode, InputDispatcher, InputEvent, RoundState, RoundTracker};
use wordle_challenge::output::share_text;
use wordle_challenge::storage::{DailyStore, FileStore, RecordStatus};

const DAY: i64 = 20_100;

fn dictionary() -> Dictionary {
    Dictionary::from_words(["apple", "crane", "slate", "alley", "robot"], 1)
}

fn type_guess(dispatcher: &mut InputDispatcher, tracker: &mut RoundTracker<'_>, word: &str) {
    for letter in word.chars() {
        dispatcher
            .dispatch(tracker, InputEvent::LetterPressed(letter))
            .unwrap();
    }
    dispatcher
        .dispatch(tracker, InputEvent::EnterPressed)
        .unwrap();
}

#[test]
fn interrupted_daily_resumes_and_finishes() {
    let dict = dictionary();
    let dir = tempfile::tempdir().unwrap();

    // First sitting: two misses, then the process goes away
    {
        let store = DailyStore::new(FileStore::new(dir.path()));
        let mut tracker = RoundTracker::daily(&dict, DAY, store).unwrap();
        assert_eq!(tracker.session().secret().text(), "APPLE");

        let mut dispatcher = InputDispatcher::new();
        type_guess(&mut dispatcher, &mut tracker, "crane");
        type_guess(&mut dispatcher, &mut tracker, "alley");
        assert_eq!(tracker.state(), RoundState::AwaitingGuess(2));
    }

    // Second sitting: board and keyboard come back exactly
    let store = DailyStore::new(FileStore::new(dir.path()));
    let mut tracker = RoundTracker::daily(&dict, DAY, store.clone()).unwrap();
    assert_eq!(tracker.session().mode(), &GameMode::Daily { day: DAY });
    assert_eq!(tracker.state(), RoundState::AwaitingGuess(2));
    assert_eq!(tracker.keyboard().state_of(b'A'), Some(LetterClass::Correct));
    assert_eq!(tracker.keyboard().state_of(b'C'), Some(LetterClass::Absent));

    let mut dispatcher = InputDispatcher::new();
    type_guess(&mut dispatcher, &mut tracker, "apple");
    assert_eq!(tracker.state(), RoundState::Won(2));

    let record = store.load(DAY).unwrap().unwrap();
    assert_eq!(record.guesses, vec!["CRANE", "ALLEY", "APPLE"]);
    assert_eq!(record.status, RecordStatus::Won);

    let outcome = tracker.outcome().unwrap();
    let text = share_text("Shash Wordle", &outcome, tracker.history().map(|(_, f)| f));
    assert_eq!(
        text,
        "Shash Wordle 3/6\n\n⬛⬛🟨⬛🟩\n🟩🟨⬛🟨⬛\n🟩🟩🟩🟩🟩"
    );

    // Third sitting: finished round stays finished
    let mut finished = RoundTracker::daily(&dict, DAY, store.clone()).unwrap();
    assert_eq!(finished.state(), RoundState::Won(2));
    assert!(finished.submit("robot").is_err());
    assert_eq!(store.load(DAY).unwrap().unwrap().guesses.len(), 3);
    assert_eq!(store.history().unwrap().len(), 1);
}

#[test]
fn other_days_are_independent() {
    let dict = dictionary();
    let dir = tempfile::tempdir().unwrap();
    let store = DailyStore::new(FileStore::new(dir.path()));

    let mut yesterday = RoundTracker::daily(&dict, DAY - 1, store.clone()).unwrap();
    yesterday.submit("apple").unwrap();

    let today = RoundTracker::daily(&dict, DAY, store.clone()).unwrap();
    assert_eq!(today.state(), RoundState::AwaitingGuess(0));
    assert!(store.load(DAY).unwrap().is_none());
}
