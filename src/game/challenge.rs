//! Shareable challenge tokens
//!
//! A token is base64 of `{"w": <word>, "by": <creator>}`, carried in the `c`
//! query parameter of a challenge link.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use serde::{Deserialize, Serialize};

/// Creator name used when none was given
pub const ANONYMOUS_CREATOR: &str = "Someone";

#[derive(Debug, Serialize, Deserialize)]
struct TokenPayload {
    w: String,
    #[serde(default)]
    by: String,
}

/// A decoded challenge: the secret and who set it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub word: Word,
    pub created_by: String,
}

/// Decode a challenge token
///
/// Accepts standard or URL-safe base64; spaces are read as `+`, since query
/// strings often arrive with `+` already decoded.
///
/// # Errors
///
/// Returns `Decode` for anything that is not a well-formed token holding a
/// 5-letter word.
pub fn decode_challenge(token: &str) -> Result<Challenge, GameError> {
    let cleaned: String = token.trim().replace(' ', "+");
    if cleaned.is_empty() {
        return Err(GameError::Decode("empty token".to_string()));
    }

    let bytes = STANDARD
        .decode(&cleaned)
        .or_else(|_| URL_SAFE.decode(&cleaned))
        .map_err(|e| GameError::Decode(e.to_string()))?;

    let payload: TokenPayload =
        serde_json::from_slice(&bytes).map_err(|e| GameError::Decode(e.to_string()))?;

    let word = Word::new(&payload.w).map_err(|e| GameError::Decode(e.to_string()))?;
    let created_by = match payload.by.trim() {
        "" => ANONYMOUS_CREATOR.to_string(),
        name => name.to_string(),
    };

    Ok(Challenge { word, created_by })
}

/// Encode a challenge token for `word`
///
/// # Errors
///
/// Returns `UnknownWord` if the dictionary does not accept `word`.
pub fn encode_challenge(
    dictionary: &Dictionary,
    word: &str,
    created_by: &str,
) -> Result<String, GameError> {
    let word = dictionary
        .lookup(word)
        .ok_or_else(|| GameError::UnknownWord(word.trim().to_uppercase()))?;

    let created_by = match created_by.trim() {
        "" => ANONYMOUS_CREATOR,
        name => name,
    };
    let payload = TokenPayload {
        w: word.text().to_string(),
        by: created_by.to_string(),
    };

    Ok(STANDARD.encode(serde_json::to_vec(&payload)?))
}

/// Build a shareable link: `<base>?c=<token>`
#[must_use]
pub fn challenge_link(base: &str, token: &str) -> String {
    format!("{}?c={token}", base.trim_end_matches('?'))
}

/// Pull the token out of a challenge link, or pass a bare token through
#[must_use]
pub fn token_from_link(link: &str) -> &str {
    let Some((_, query)) = link.split_once('?') else {
        return link.trim();
    };
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("c="))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["apple", "crane", "llama"], 3)
    }

    #[test]
    fn encode_then_decode_preserves_word_and_creator() {
        let token = encode_challenge(&dictionary(), "crane", "Priya").unwrap();
        let challenge = decode_challenge(&token).unwrap();
        assert_eq!(challenge.word.text(), "CRANE");
        assert_eq!(challenge.created_by, "Priya");
    }

    #[test]
    fn token_is_base64_json() {
        let token = encode_challenge(&dictionary(), "apple", "Sam").unwrap();
        let bytes = STANDARD.decode(&token).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"w":"APPLE","by":"Sam"}"#
        );
    }

    #[test]
    fn encode_rejects_unknown_word() {
        assert!(matches!(
            encode_challenge(&dictionary(), "zzzzz", "Sam"),
            Err(GameError::UnknownWord(_))
        ));
    }

    #[test]
    fn blank_creator_becomes_someone() {
        let token = encode_challenge(&dictionary(), "apple", "  ").unwrap();
        assert_eq!(decode_challenge(&token).unwrap().created_by, "Someone");
    }

    #[test]
    fn decodes_lowercase_word_from_foreign_token() {
        let token = STANDARD.encode(r#"{"w":"llama","by":"Kim"}"#);
        let challenge = decode_challenge(&token).unwrap();
        assert_eq!(challenge.word.text(), "LLAMA");
    }

    #[test]
    fn missing_creator_field_is_tolerated() {
        let token = STANDARD.encode(r#"{"w":"apple"}"#);
        assert_eq!(decode_challenge(&token).unwrap().created_by, "Someone");
    }

    #[test]
    fn malformed_tokens_are_decode_errors() {
        let bad_json = STANDARD.encode("not json");
        let bad_word = STANDARD.encode(r#"{"w":"toolong","by":"x"}"#);
        for token in ["", "!!!!", bad_json.as_str(), bad_word.as_str()] {
            assert!(
                matches!(decode_challenge(token), Err(GameError::Decode(_))),
                "token {token:?} should fail"
            );
        }
    }

    #[test]
    fn spaces_are_read_as_plus() {
        let token = STANDARD.encode(r#"{"w":"apple","by":"~~>"}"#);
        assert!(token.contains('+'));
        let damaged = token.replace('+', " ");
        assert_eq!(
            decode_challenge(&damaged).unwrap(),
            decode_challenge(&token).unwrap()
        );
    }

    #[test]
    fn link_building_and_parsing() {
        let link = challenge_link("https://example.com/wordle/", "abc=");
        assert_eq!(link, "https://example.com/wordle/?c=abc=");
        assert_eq!(token_from_link(&link), "abc=");
        assert_eq!(token_from_link("https://x.io/?a=1&c=tok"), "tok");
        assert_eq!(token_from_link("  baretoken "), "baretoken");
        assert_eq!(token_from_link("https://x.io/?a=1"), "");
    }
}
