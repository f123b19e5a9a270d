//! Printing for the line-based front end and the non-interactive commands

use super::formatters::{colored_row, keyboard_lines, share_text};
use crate::core::MAX_GUESSES;
use crate::game::RoundTracker;
use crate::storage::{DailyRecord, RecordStatus};
use colored::Colorize;

/// Print the board so far plus the keyboard
pub fn print_board(tracker: &RoundTracker<'_>) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", tracker.session().mode().banner().bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    let mut rows = 0;
    for (guess, feedback) in tracker.history() {
        println!("  {}", colored_row(guess, feedback));
        rows += 1;
    }
    for _ in rows..MAX_GUESSES {
        println!("  {}", " · ".repeat(5).bright_black());
    }

    println!();
    for line in keyboard_lines(tracker.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-round summary and the share text
pub fn print_outcome(tracker: &RoundTracker<'_>, share_title: &str) {
    let Some(outcome) = tracker.outcome() else {
        return;
    };

    println!("{}", "═".repeat(40).bright_cyan());
    if outcome.won {
        let cheer = match outcome.guesses_used {
            1 => "Genius!",
            2 => "Magnificent!",
            3 => "Impressive!",
            4 => "Splendid!",
            5 => "Great!",
            _ => "Phew!",
        };
        println!("  {} {}", cheer.bright_green().bold(), outcome);
    } else {
        println!("  {}", outcome.to_string().red().bold());
    }
    println!("{}", "═".repeat(40).bright_cyan());

    let text = share_text(
        share_title,
        &outcome,
        tracker.history().map(|(_, feedback)| feedback),
    );
    println!("\n{text}\n");
}

/// Print a newly created challenge
pub fn print_challenge(word: &str, token: &str, link: &str) {
    println!(
        "Challenge for {}",
        word.to_uppercase().bright_yellow().bold()
    );
    println!("  Token: {token}");
    println!("  Link:  {}", link.bright_cyan());
}

/// Print stored daily records, oldest first
pub fn print_history(records: &[DailyRecord]) {
    if records.is_empty() {
        println!("No daily games played yet.");
        return;
    }

    println!("\n{}", " DAILY HISTORY ".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    let mut won = 0;
    for record in records {
        let status = match record.status {
            RecordStatus::Won => {
                won += 1;
                format!("won in {}", record.guesses.len()).green()
            }
            RecordStatus::Lost => "lost".red(),
            RecordStatus::InProgress => "in progress".yellow(),
        };
        println!(
            "  Day {:>6}  {:<14} {}",
            record.day,
            status,
            record.guesses.join(" ").bright_black()
        );
    }

    println!("{}", "─".repeat(40).cyan());
    println!("  Played: {}  Won: {won}", records.len());
}
