//! Tag frequency counting.
//!
//! [`FrequencyMap`] is the ordered word → count mapping at the heart of the
//! extractor. Backing it with a `BTreeMap` makes alphabetical enumeration a
//! structural guarantee rather than a sort-at-render step.
//!
//! Every key is non-empty, lowercase, ASCII-alphabetic, and absent from the
//! stop-word set the map was built with.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::stopwords::StopWordSet;
use crate::tokenize;

/// Ordered mapping from normalized word to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: BTreeMap<String, u64>,
}

impl FrequencyMap {
    /// Count tag frequencies in `text`, excluding stop words.
    ///
    /// A pure function of `(text, stop_words)`: splits on runs of
    /// whitespace, normalizes each token to its lowercase ASCII letters,
    /// and counts every surviving token that is not a stop word. Running it
    /// twice on the same inputs produces an identical map.
    pub fn extract(text: &str, stop_words: &StopWordSet) -> Self {
        let mut counts = BTreeMap::new();
        for word in tokenize::tokens(text) {
            if stop_words.contains(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `word`, or 0 if it is not a tag.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no tags were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts — the number of tokens that survived filtering.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(word, count)` entries in ascending alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_counts_and_filters() {
        let stop = StopWordSet::from_list(&["the"]);
        let map = FrequencyMap::extract("The Quick fox; the LAZY fox!", &stop);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("fox"), 2);
        assert_eq!(map.get("lazy"), 1);
        assert_eq!(map.get("quick"), 1);
        assert_eq!(map.get("the"), 0);
    }

    #[test]
    fn test_keys_are_lowercase_ascii_alphabetic() {
        let stop = StopWordSet::empty();
        let map = FrequencyMap::extract("Rust2024! État δ über 99 mixed-CASE", &stop);

        for (word, _) in map.iter() {
            assert!(!word.is_empty());
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "bad key {word:?}");
        }
    }

    #[test]
    fn test_no_key_is_a_stop_word() {
        let stop = StopWordSet::from_list(&["the", "a", "fox"]);
        let map = FrequencyMap::extract("the a fox jumps over a fox", &stop);

        for (word, _) in map.iter() {
            assert!(!stop.contains(word));
        }
        assert_eq!(map.get("jumps"), 1);
        assert_eq!(map.get("over"), 1);
    }

    #[test]
    fn test_total_equals_surviving_tokens() {
        let stop = StopWordSet::from_list(&["the"]);
        // 6 tokens, 2 are "the", 1 is digits-only.
        let map = FrequencyMap::extract("the fox 123 ate the hen", &stop);
        assert_eq!(map.total(), 3);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let stop = StopWordSet::from_list(&["and"]);
        let text = "pack my box with five dozen liquor jugs and more jugs";
        let first = FrequencyMap::extract(text, &stop);
        let second = FrequencyMap::extract(text, &stop);
        assert_eq!(first, second);
    }

    #[test]
    fn test_iteration_is_ascending_alphabetical() {
        let stop = StopWordSet::empty();
        let map = FrequencyMap::extract("zebra apple mango apple kiwi", &stop);

        let keys: Vec<&str> = map.iter().map(|(word, _)| word).collect();
        assert_eq!(keys, ["apple", "kiwi", "mango", "zebra"]);
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let stop = StopWordSet::from_list(&["the"]);
        let map = FrequencyMap::extract("", &stop);
        assert!(map.is_empty());
        assert_eq!(map.total(), 0);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let stop = StopWordSet::from_list(&["the"]);
        let map = FrequencyMap::extract("the fox the fox owl", &stop);

        let value = serde_json::to_value(&map).expect("serialize");
        assert_eq!(value, serde_json::json!({ "fox": 2, "owl": 1 }));
    }
}
