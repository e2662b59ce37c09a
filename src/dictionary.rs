//! The candidate pool a ladder is built from.
//!
//! A [`Dictionary`] doubles as the search's "unvisited" set: a word is taken
//! out of it the first time the search reaches it, so membership and
//! removal happen in a single hash probe.

use std::collections::HashSet;

use tracing::debug;

use crate::word::Word;

/// A deduplicated set of words that all share one length.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<Word>,
    word_length: usize,
    skipped: usize,
}

impl Dictionary {
    /// An empty dictionary for words of `word_length` letters.
    pub fn new(word_length: usize) -> Self {
        Self {
            words: HashSet::new(),
            word_length,
            skipped: 0,
        }
    }

    /// Build a dictionary for `word_length`-letter words from raw entries.
    ///
    /// Entries that are not valid words, or that have another length, can
    /// never appear on a ladder and are skipped. Duplicates collapse.
    pub fn from_entries<I, S>(word_length: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new(word_length);
        for entry in entries {
            match Word::new(entry.as_ref()) {
                Ok(word) => {
                    dictionary.insert(word);
                }
                Err(err) => {
                    debug!(entry = entry.as_ref(), error = %err, "skipping dictionary entry");
                    dictionary.skipped += 1;
                }
            }
        }
        if dictionary.skipped > 0 {
            debug!(
                kept = dictionary.len(),
                skipped = dictionary.skipped,
                word_length,
                "built dictionary"
            );
        }
        dictionary
    }

    /// Add a word. Returns false if it was already present or has the wrong
    /// length (the latter is counted as skipped).
    pub fn insert(&mut self, word: Word) -> bool {
        if word.len() != self.word_length {
            self.skipped += 1;
            return false;
        }
        self.words.insert(word)
    }

    /// Whether `letters` is still an unvisited entry.
    pub fn contains(&self, letters: &[u8]) -> bool {
        self.words.contains(letters)
    }

    /// Remove `letters` if present, reporting whether it was there.
    pub fn take(&mut self, letters: &[u8]) -> bool {
        self.words.remove(letters)
    }

    /// Number of words not yet taken.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True once every word has been taken.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length every entry shares.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Entries rejected while building: invalid text or the wrong length.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Remaining words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
