//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, colored board after
//! every accepted guess.

use crate::error::GameError;
use crate::game::{GuessResult, RoundTracker};
use crate::output::{print_board, print_outcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What one line of input did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Quit,
    Submitted(GuessResult),
    /// The guess was refused; the message is shown and the player retries
    Rejected(String),
}

/// Interpret one input line
///
/// # Errors
///
/// Returns errors the player cannot fix by typing another word.
pub fn handle_line(tracker: &mut RoundTracker<'_>, line: &str) -> Result<LineAction, GameError> {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(LineAction::Quit),
        "" => return Ok(LineAction::Rejected("Type a 5-letter word".to_string())),
        _ => {}
    }

    match tracker.submit(line) {
        Ok(result) => Ok(LineAction::Submitted(result)),
        Err(e) if e.is_user_recoverable() => Ok(LineAction::Rejected(e.to_string())),
        Err(e) => Err(e),
    }
}

/// Run the simple interactive CLI mode until the round ends or input closes
///
/// # Errors
///
/// Returns an error on I/O failure reading stdin or writing stdout.
pub fn run_simple(tracker: &mut RoundTracker<'_>, share_title: &str) -> anyhow::Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════╝");
    println!("\nGuess the 5-letter word in 6 tries. Type 'quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_board(tracker);
    while !tracker.is_terminal() {
        print!("Guess {}: ", tracker.current_row() + 1);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match handle_line(tracker, &line?)? {
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::Rejected(message) => println!("{}", format!("❌ {message}").red()),
            LineAction::Submitted(_) => print_board(tracker),
        }
    }

    print_outcome(tracker, share_title);
    Ok(())
}
