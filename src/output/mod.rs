//! Terminal output formatting
//!
//! Colored boards, keyboards, summaries and share text.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_challenge, print_history, print_outcome};
pub use formatters::share_text;
