//! Randomized checks against a straightforward reference search over an
//! explicit adjacency graph.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use word_ladder::{ladder_length, LadderOutcome, LadderSearch, Word};

const LETTERS: &[u8] = b"abcd";
const WORD_LENGTH: usize = 3;
const ROUNDS: usize = 300;

fn random_word(rng: &mut StdRng) -> String {
    (0..WORD_LENGTH)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}

fn random_dictionary(rng: &mut StdRng) -> Vec<String> {
    let size = rng.random_range(0..40);
    (0..size).map(|_| random_word(rng)).collect()
}

/// Plain BFS over `{begin} ∪ words` with edges between adjacent words.
fn reference_length(begin: &str, end: &str, words: &[String]) -> u32 {
    let end_word = Word::new(end).unwrap();
    let nodes: Vec<Word> = words
        .iter()
        .map(|w| Word::new(w.as_str()).unwrap())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    if !nodes.contains(&end_word) {
        return 0;
    }
    if begin == end {
        return 1;
    }

    let start = Word::new(begin).unwrap();
    let mut visited: HashSet<Word> = HashSet::new();
    visited.insert(start.clone());
    let mut queue = VecDeque::from([(start, 1u32)]);

    while let Some((word, distance)) = queue.pop_front() {
        for next in nodes.iter().filter(|n| word.is_adjacent(n)) {
            if *next == end_word {
                return distance + 1;
            }
            if visited.insert(next.clone()) {
                queue.push_back((next.clone(), distance + 1));
            }
        }
    }
    0
}

#[test]
fn test_agrees_with_reference_search() {
    let mut rng = StdRng::seed_from_u64(0x1add3);

    for _ in 0..ROUNDS {
        let words = random_dictionary(&mut rng);
        let begin = random_word(&mut rng);
        let end = if rng.random_bool(0.7) && !words.is_empty() {
            words[rng.random_range(0..words.len())].clone()
        } else {
            random_word(&mut rng)
        };

        assert_eq!(
            ladder_length(&begin, &end, &words),
            reference_length(&begin, &end, &words),
            "begin={} end={} words={:?}",
            begin,
            end,
            words
        );
    }
}

#[test]
fn test_adding_words_never_lengthens_ladder() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..ROUNDS {
        let words = random_dictionary(&mut rng);
        if words.is_empty() {
            continue;
        }
        let begin = random_word(&mut rng);
        let end = words[rng.random_range(0..words.len())].clone();
        let search = LadderSearch::new(&begin, &end).unwrap();

        let before = search.search(&words);

        let mut extended = words.clone();
        extended.extend((0..rng.random_range(1..10)).map(|_| random_word(&mut rng)));
        let after = search.search(&extended);

        if let LadderOutcome::Found(distance) = before {
            let longer = after.distance().expect("ladder lost after adding words");
            assert!(
                longer <= distance,
                "begin={} end={} before={} after={}",
                begin,
                end,
                distance,
                longer
            );
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let words = random_dictionary(&mut rng);
        let begin = random_word(&mut rng);
        let end = random_word(&mut rng);
        let search = LadderSearch::new(&begin, &end).unwrap();

        assert_eq!(search.run(&words), search.run(&words));
    }
}

#[test]
fn test_words_expanded_at_most_once() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..ROUNDS {
        let words = random_dictionary(&mut rng);
        let unique: HashSet<&String> = words.iter().collect();
        let begin = random_word(&mut rng);
        let end = random_word(&mut rng);

        let (outcome, stats) = LadderSearch::new(&begin, &end).unwrap().run(&words);

        assert!(stats.expanded <= stats.enqueued);
        assert!(stats.enqueued <= unique.len() + 1);
        if outcome == LadderOutcome::Unreachable {
            // Every expansion ran to completion.
            assert_eq!(stats.expanded, stats.enqueued);
            assert_eq!(stats.candidates, stats.expanded * WORD_LENGTH * 25);
        }
    }
}
