//! Validated word values.
//!
//! A [`Word`] is a non-empty string of lowercase ASCII letters. Hashing and
//! equality work on the raw bytes, so a `HashSet<Word>` can be probed with a
//! `&[u8]` candidate buffer during the search without allocating.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{LadderError, Result};
use crate::ALPHABET;

/// A node in the implicit ladder graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Validate and wrap `text`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        Self::validate(&text)?;
        Ok(Self(text))
    }

    /// Build a word from a candidate buffer that is already known to hold
    /// only letters from [`ALPHABET`].
    pub(crate) fn from_letters(letters: &[u8]) -> Self {
        debug_assert!(letters.iter().all(|b| ALPHABET.contains(b)));
        Self(letters.iter().map(|&b| b as char).collect())
    }

    fn validate(text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(LadderError::Empty);
        }
        if let Some((position, ch)) = text
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_lowercase())
        {
            return Err(LadderError::InvalidCharacter {
                word: text.to_string(),
                ch,
                position,
            });
        }
        Ok(())
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The word as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The letters as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of positions at which two equal-length words differ.
    /// Returns `None` when the lengths differ.
    pub fn hamming_distance(&self, other: &Word) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.as_bytes()
                .iter()
                .zip(other.as_bytes())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// True when `other` is reachable from `self` by exactly one substitution.
    pub fn is_adjacent(&self, other: &Word) -> bool {
        self.hamming_distance(other) == Some(1)
    }
}

// Must hash exactly like `[u8]` so that `Borrow<[u8]>` lookups agree.
impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Borrow<[u8]> for Word {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Word {
    type Error = LadderError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl TryFrom<String> for Word {
    type Error = LadderError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl FromStr for Word {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
