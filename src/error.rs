//! Error types for malformed ladder input.

use thiserror::Error;

/// Errors raised while validating words handed to a search.
///
/// A search that runs to completion never fails; it reports its result as a
/// [`LadderOutcome`](crate::LadderOutcome). These errors only describe input
/// that cannot take part in a ladder at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// The word has no letters.
    #[error("word is empty")]
    Empty,

    /// The word contains something other than a lowercase ASCII letter.
    #[error("invalid character {ch:?} at position {position} in word {word:?}")]
    InvalidCharacter {
        word: String,
        ch: char,
        position: usize,
    },

    /// Start and end words have different lengths, so no substitution chain
    /// can connect them.
    #[error("start word {begin:?} and end word {end:?} differ in length")]
    LengthMismatch { begin: String, end: String },
}

pub type Result<T> = std::result::Result<T, LadderError>;
