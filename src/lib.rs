//! # Word Ladder
//!
//! Finds the shortest chain of single-letter substitutions that turns a start
//! word into an end word, where every word after the first must come from a
//! dictionary.
//!
//! The search is a breadth-first traversal over words, generating neighbours
//! on demand and using the dictionary itself as the set of unvisited words.
//!
//! ```
//! use word_ladder::{ladder_length, LadderOutcome, LadderSearch};
//!
//! let words = ["hot", "dot", "dog", "lot", "log", "cog"];
//! assert_eq!(ladder_length("hit", "cog", &words), 5);
//!
//! let search = LadderSearch::new("hit", "cog")?;
//! assert_eq!(search.search(&words[..5]), LadderOutcome::TargetNotInDictionary);
//! # Ok::<(), word_ladder::LadderError>(())
//! ```

pub mod dictionary;
pub mod error;
pub mod ladder;
pub mod word;

pub use dictionary::Dictionary;
pub use error::{LadderError, Result};
pub use ladder::{LadderOutcome, LadderSearch, SameWordPolicy, SearchConfig, SearchStats};
pub use word::Word;

use tracing::debug;

/// Letters a substitution may place.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of words in the shortest ladder from `begin` to `end`, both
/// included, or 0 when there is none.
///
/// Malformed input (empty words, characters outside `a..=z`, or start and
/// end words of different lengths) also yields 0. Use [`LadderSearch`] to
/// tell these cases apart.
pub fn ladder_length<S: AsRef<str>>(begin: &str, end: &str, word_list: &[S]) -> u32 {
    match LadderSearch::new(begin, end) {
        Ok(search) => search.search(word_list).as_legacy(),
        Err(err) => {
            debug!(begin, end, error = %err, "rejecting ladder query");
            0
        }
    }
}
