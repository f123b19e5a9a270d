//! Command implementations

pub mod create;
pub mod history;
pub mod simple;

pub use create::create_challenge;
pub use history::load_history;
pub use simple::{LineAction, handle_line, run_simple};

use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::{RoundTracker, decode_challenge, today, token_from_link};
use crate::storage::{DailyStore, FileStore};
use std::path::Path;
use tracing::warn;

/// Which round a front end should start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundKind {
    /// Today's puzzle, persisted under the store directory
    Daily,
    /// A challenge token or a full challenge link
    Challenge(String),
    Random,
}

/// A started round, plus a note for the player when the requested round
/// could not be started and another was substituted
pub struct RoundStart<'a> {
    pub tracker: RoundTracker<'a>,
    pub notice: Option<String>,
}

/// Build the tracker for `kind`
///
/// A challenge token that does not decode falls back to a random round.
///
/// # Errors
///
/// - `EmptyDictionary` for a random round with no words
/// - storage errors when the daily record cannot be read
pub fn start_round<'a>(
    dictionary: &'a Dictionary,
    kind: &RoundKind,
    store_dir: &Path,
) -> Result<RoundStart<'a>, GameError> {
    let mut notice = None;
    let tracker = match kind {
        RoundKind::Daily => {
            let store = DailyStore::new(FileStore::new(store_dir));
            RoundTracker::daily(dictionary, today(), store)?
        }
        RoundKind::Challenge(token) => match decode_challenge(token_from_link(token)) {
            Ok(challenge) => RoundTracker::challenge(dictionary, challenge),
            Err(e @ GameError::Decode(_)) => {
                warn!(error = %e, "Challenge rejected, starting a random round");
                notice = Some(format!("{e}. Playing a random word instead"));
                RoundTracker::random(dictionary, &mut rand::rng())?
            }
            Err(e) => return Err(e),
        },
        RoundKind::Random => RoundTracker::random(dictionary, &mut rand::rng())?,
    };
    Ok(RoundStart { tracker, notice })
}
