//! Challenge creation

use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::{challenge_link, encode_challenge};
use tracing::info;

/// Encode `word` as a challenge and build its link
///
/// Returns `(token, link)`.
///
/// # Errors
///
/// Returns `UnknownWord` if the word is not in the dictionary.
pub fn create_challenge(
    dictionary: &Dictionary,
    word: &str,
    created_by: &str,
    link_base: &str,
) -> Result<(String, String), GameError> {
    let token = encode_challenge(dictionary, word, created_by)?;
    let link = challenge_link(link_base, &token);
    info!(created_by, "Created challenge");
    Ok((token, link))
}
