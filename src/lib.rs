//! Wordle Challenge
//!
//! A Wordle-style word game engine: feedback evaluation, round tracking,
//! daily puzzles with persisted progress, and shareable challenge tokens.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_challenge::dictionary::Dictionary;
//! use wordle_challenge::game::{GameMode, RoundTracker};
//!
//! let dictionary = Dictionary::embedded();
//! let secret = dictionary.pick_daily(0);
//! let mut tracker = RoundTracker::new(&dictionary, secret, GameMode::Random);
//!
//! let result = tracker.submit("crane").unwrap();
//! println!("{} {}", result.guess, result.feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word list and secret selection
pub mod dictionary;

pub mod error;

// Session lifecycle
pub mod game;

// Daily record persistence
pub mod storage;

pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;
