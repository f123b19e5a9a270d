//! Game engine
//!
//! Session lifecycle on top of the pure core types: the round tracker state
//! machine, challenge tokens, input routing, and reveal timing.

pub mod challenge;
pub mod input;
pub mod reveal;
mod session;
mod tracker;

pub use challenge::{Challenge, challenge_link, decode_challenge, encode_challenge, token_from_link};
pub use input::{DispatchOutcome, InputDispatcher, InputEvent};
pub use reveal::{RevealStep, RevealTimeline, RevealTiming};
pub use session::{GameMode, Outcome, RoundState, Session, day_index, today};
pub use tracker::{GuessResult, RoundTracker};
