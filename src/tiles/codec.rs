//! Translate from strings to letter codes and vice versa.
//!
//! Each tile is translated to a code:
//! - 0: No tile (empty square), written as `.` or ` `
//! - 1 .. 26: `a` .. `z`
//! - 64: Blank tile (unassigned), written as `*` or `?`
//! - 65 .. 90: `A` .. `Z` (blank tile assigned to `a`..`z`)
use super::codes::{Code, Label, ALPHABET_LEN, BLANK, EMPTY, IS_WILDCARD, LETTER_MASK};
use crate::error::Error;

/// Return the label for a lowercase ascii letter.
pub fn label_of(ch: char) -> Option<Label> {
    if ch.is_ascii_lowercase() {
        Some(ch as u8 - b'a' + 1)
    } else {
        None
    }
}

fn char_of(label: Label) -> char {
    if (1..=ALPHABET_LEN as u8).contains(&label) {
        (b'a' + label - 1) as char
    } else {
        char::REPLACEMENT_CHARACTER
    }
}

/// Encode a dictionary word, and return a list of labels.
/// ## Errors
/// An error is returned if the word contains anything but `a`..`z`.
/// ## Examples
/// ```
/// use scrabble_solver::{codec, Error};
/// let labels = codec::encode("azb")?;
/// assert_eq!(labels, vec![1, 26, 2]);
/// assert!(codec::encode("Zebra").is_err());
/// # Ok::<(), Error>(())
/// ```
pub fn encode(word: &str) -> Result<Vec<Label>, Error> {
    word.chars()
        .map(|ch| label_of(ch).ok_or(Error::EncodeInvalidToken(ch)))
        .collect()
}

/// Encode a single character of a board row or a rack.
/// ## Errors
/// An error is returned if the character has no code.
/// ## Examples
/// ```
/// use scrabble_solver::{codec, Error};
/// let codes = "aZ.*"
///     .chars()
///     .map(codec::encode_code)
///     .collect::<Result<Vec<_>, Error>>()?;
/// assert_eq!(codes, vec![1, 90, 0, 64]);
/// # Ok::<(), Error>(())
/// ```
pub fn encode_code(ch: char) -> Result<Code, Error> {
    match ch {
        '.' | ' ' => Ok(EMPTY),
        '*' | '?' => Ok(BLANK),
        'a'..='z' => Ok(ch as u8 - b'a' + 1),
        'A'..='Z' => Ok((ch as u8 - b'A' + 1) | IS_WILDCARD),
        _ => Err(Error::EncodeInvalidToken(ch)),
    }
}

/// Decode a list of labels to a lowercase string.
pub fn decode<I: IntoIterator<Item = Label>>(labels: I) -> String {
    labels.into_iter().map(char_of).collect()
}

/// Decode a single code. Assigned blanks decode to uppercase.
pub fn decode_code(code: Code) -> char {
    match code {
        EMPTY => '.',
        BLANK => '*',
        _ if code & IS_WILDCARD != 0 => char_of(code & LETTER_MASK).to_ascii_uppercase(),
        _ => char_of(code),
    }
}
