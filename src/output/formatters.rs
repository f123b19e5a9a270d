//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyboardState, LetterClass, Word};
use crate::game::Outcome;
use colored::{ColoredString, Colorize};

/// Share text: `"<title> <score>"`, a blank line, then one emoji row per guess
#[must_use]
pub fn share_text<'a, I>(title: &str, outcome: &Outcome, history: I) -> String
where
    I: IntoIterator<Item = &'a Feedback>,
{
    let rows: Vec<String> = history.into_iter().map(Feedback::to_emoji).collect();
    format!("{title} {}\n\n{}", outcome.score(), rows.join("\n"))
}

/// One letter painted the way the board shows it
#[must_use]
pub fn colored_tile(letter: char, class: Option<LetterClass>) -> ColoredString {
    let tile = format!(" {letter} ");
    match class {
        Some(LetterClass::Correct) => tile.black().on_green().bold(),
        Some(LetterClass::Present) => tile.black().on_yellow().bold(),
        Some(LetterClass::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A guessed word as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &class)| colored_tile(char::from(letter), Some(class)).to_string())
        .collect()
}

/// The three keyboard rows, each key colored by its best-seen class
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| colored_tile(char::from(letter), keyboard.state_of(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(won: bool, guesses_used: usize) -> Outcome {
        Outcome {
            won,
            guesses_used,
            secret: Word::new("apple").unwrap(),
        }
    }

    #[test]
    fn share_text_for_a_win() {
        let secret = Word::new("apple").unwrap();
        let history = [
            Feedback::evaluate(&Word::new("alley").unwrap(), &secret),
            Feedback::PERFECT,
        ];

        let text = share_text("Shash Wordle", &outcome(true, 2), &history);
        assert_eq!(text, "Shash Wordle 2/6\n\n🟩🟨⬛🟨⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_for_a_loss_uses_x() {
        let history = [Feedback::new([LetterClass::Absent; 5]); 6];
        let text = share_text("Daily", &outcome(false, 6), &history);
        assert!(text.starts_with("Daily X/6\n\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn keyboard_lines_follow_qwerty_rows() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&KeyboardState::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q "));
        assert!(lines[2].starts_with("     Z "));
    }
}
