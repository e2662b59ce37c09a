//! Shortest word ladder search.
//!
//! The search is a breadth-first traversal of an implicit graph: nodes are
//! words, and two words are joined when they differ in exactly one letter.
//! Edges are never stored. Each dequeued word is expanded by trying every
//! other letter of the alphabet at every position, and a candidate is kept
//! only if it is still in the [`Dictionary`]. Because all words at distance
//! `d` are queued before any word at distance `d + 1` is expanded, the first
//! time the target is generated is along a shortest ladder.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::error::{LadderError, Result};
use crate::word::Word;
use crate::ALPHABET;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LadderOutcome {
    /// A ladder exists; the value counts its words, both ends included.
    Found(u32),
    /// The end word is not in the dictionary, so no ladder can finish.
    TargetNotInDictionary,
    /// The end word is in the dictionary but no chain of dictionary words
    /// (within the configured length limit) reaches it.
    Unreachable,
}

impl LadderOutcome {
    /// Ladder length, if one was found.
    pub fn distance(self) -> Option<u32> {
        match self {
            LadderOutcome::Found(distance) => Some(distance),
            _ => None,
        }
    }

    /// True for [`LadderOutcome::Found`].
    pub fn is_found(self) -> bool {
        matches!(self, LadderOutcome::Found(_))
    }

    /// Collapse to the classic integer answer: the ladder length, or 0 when
    /// there is none.
    pub fn as_legacy(self) -> u32 {
        self.distance().unwrap_or(0)
    }
}

impl fmt::Display for LadderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderOutcome::Found(distance) => write!(f, "found ({} words)", distance),
            LadderOutcome::TargetNotInDictionary => write!(f, "target not in dictionary"),
            LadderOutcome::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// How to answer when the start and end words are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameWordPolicy {
    /// A one-word ladder, as long as the word is in the dictionary.
    #[default]
    Trivial,
    /// Run the ordinary search. A substitution never maps a word onto
    /// itself, so the answer is 3 when the word has a dictionary neighbour
    /// to step out to and back from, and unreachable otherwise.
    Search,
}

/// Knobs for a [`LadderSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub same_word: SameWordPolicy,
    /// Longest ladder (in words) worth looking for. `None` is unbounded.
    pub max_length: Option<u32>,
}

impl SearchConfig {
    /// Unbounded search, trivial same-word answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how `begin == end` is answered.
    pub fn with_same_word(mut self, policy: SameWordPolicy) -> Self {
        self.same_word = policy;
        self
    }

    /// Give up on ladders longer than `max_length` words.
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    fn allows(&self, length: u32) -> bool {
        self.max_length.map_or(true, |max| length <= max)
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Words taken off the frontier and expanded.
    pub expanded: usize,
    /// Words pushed onto the frontier, the start word included.
    pub enqueued: usize,
    /// Substitutions tried.
    pub candidates: usize,
    /// Highest level that was expanded.
    pub deepest_level: u32,
}

/// A ladder query: fixed start and end words plus configuration.
///
/// The dictionary is supplied per call and consumed by it, so the same
/// `LadderSearch` can be run any number of times with identical results.
#[derive(Debug, Clone)]
pub struct LadderSearch {
    begin: Word,
    end: Word,
    config: SearchConfig,
}

impl LadderSearch {
    /// Validate `begin` and `end` and prepare a search between them.
    pub fn new(begin: &str, end: &str) -> Result<Self> {
        Self::from_words(Word::new(begin)?, Word::new(end)?)
    }

    /// Like [`new`](Self::new), for words that are already validated.
    pub fn from_words(begin: Word, end: Word) -> Result<Self> {
        if begin.len() != end.len() {
            return Err(LadderError::LengthMismatch {
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            begin,
            end,
            config: SearchConfig::default(),
        })
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the configuration in place.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Start word.
    pub fn begin(&self) -> &Word {
        &self.begin
    }

    /// End word.
    pub fn end(&self) -> &Word {
        &self.end
    }

    /// Length of the shortest ladder through `word_list`.
    pub fn search<I, S>(&self, word_list: I) -> LadderOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(word_list).0
    }

    /// Like [`search`](Self::search), also returning the search counters.
    pub fn run<I, S>(&self, word_list: I) -> (LadderOutcome, SearchStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = Dictionary::from_entries(self.begin.len(), word_list);
        self.run_on(dictionary)
    }

    /// Search an already built dictionary. It is consumed: every word the
    /// search reaches is removed from it.
    ///
    /// A dictionary built for a different word length cannot hold the end
    /// word, so the search answers [`LadderOutcome::TargetNotInDictionary`].
    pub fn run_on(&self, mut dictionary: Dictionary) -> (LadderOutcome, SearchStats) {
        if dictionary.word_length() != self.begin.len() {
            debug!(
                dictionary_length = dictionary.word_length(),
                word_length = self.begin.len(),
                "dictionary word length does not match the search"
            );
        }

        let mut stats = SearchStats::default();
        let outcome = self.breadth_first(&mut dictionary, &mut stats);

        debug!(
            begin = %self.begin,
            end = %self.end,
            %outcome,
            expanded = stats.expanded,
            enqueued = stats.enqueued,
            candidates = stats.candidates,
            deepest_level = stats.deepest_level,
            "ladder search finished"
        );

        (outcome, stats)
    }

    fn breadth_first(&self, dictionary: &mut Dictionary, stats: &mut SearchStats) -> LadderOutcome {
        let end = self.end.as_bytes();

        if !dictionary.contains(end) {
            return LadderOutcome::TargetNotInDictionary;
        }

        if self.begin == self.end && self.config.same_word == SameWordPolicy::Trivial {
            return if self.config.allows(1) {
                LadderOutcome::Found(1)
            } else {
                LadderOutcome::Unreachable
            };
        }

        dictionary.take(self.begin.as_bytes());
        let mut frontier: VecDeque<(Word, u32)> = VecDeque::new();
        frontier.push_back((self.begin.clone(), 1));
        stats.enqueued += 1;

        let mut candidate = Vec::with_capacity(self.begin.len());

        while let Some((word, level)) = frontier.pop_front() {
            // Nothing found from here could fit within the limit.
            if !self.config.allows(level + 1) {
                continue;
            }

            trace!(%word, level, "expanding");
            stats.expanded += 1;
            stats.deepest_level = stats.deepest_level.max(level);

            candidate.clear();
            candidate.extend_from_slice(word.as_bytes());

            for position in 0..candidate.len() {
                let original = candidate[position];

                for &letter in ALPHABET {
                    if letter == original {
                        continue;
                    }
                    candidate[position] = letter;
                    stats.candidates += 1;

                    if candidate == end {
                        return LadderOutcome::Found(level + 1);
                    }

                    if dictionary.take(&candidate) {
                        frontier.push_back((Word::from_letters(&candidate), level + 1));
                        stats.enqueued += 1;
                    }
                }

                candidate[position] = original;
            }
        }

        LadderOutcome::Unreachable
    }
}
