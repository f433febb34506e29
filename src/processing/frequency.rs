//! Unigram and trigram frequency models
//!
//! [`FrequencyTable`] is an explicit key → count table that remembers the
//! order in which keys were first seen. Ranking is a stable sort on count,
//! so equal counts keep first-encountered order and results are
//! reproducible run to run.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Insertion-ordered occurrence counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Hash + Eq> {
    counts: IndexMap<K, usize>,
    total: usize,
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }
}

impl<K: Hash + Eq> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for `key`; absent keys count zero.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// The `n` most frequent entries, highest count first. Ties keep
    /// first-seen order. Asking for more than [`len`](Self::len) returns
    /// everything.
    pub fn top(&self, n: usize) -> Vec<(&K, usize)> {
        let mut entries: Vec<(&K, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

/// Three consecutive processed tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trigram([String; 3]);

impl Trigram {
    pub fn new(first: impl Into<String>, second: impl Into<String>, third: impl Into<String>) -> Self {
        Self([first.into(), second.into(), third.into()])
    }

    pub fn parts(&self) -> &[String; 3] {
        &self.0
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

impl Serialize for Trigram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count every token.
pub fn unigram_frequencies(tokens: &[String]) -> FrequencyTable<String> {
    tokens.iter().cloned().collect()
}

/// Count every width-3 window, stride 1. Fewer than three tokens gives an
/// empty table.
pub fn trigram_frequencies(tokens: &[String]) -> FrequencyTable<Trigram> {
    tokens
        .windows(3)
        .map(|w| Trigram::new(w[0].as_str(), w[1].as_str(), w[2].as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn unigram_counts_sum_to_length() {
        let tokens = toks(&["a", "b", "a", "c", "a", "b"]);
        let table = unigram_frequencies(&tokens);
        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 2);
        assert_eq!(table.get("c"), 1);
        assert_eq!(table.get("z"), 0);
        assert_eq!(table.total(), tokens.len());
        assert_eq!(table.iter().map(|(_, c)| c).sum::<usize>(), tokens.len());
    }

    #[test]
    fn top_ties_keep_first_seen_order() {
        let table = unigram_frequencies(&toks(&["x", "y", "z", "y", "x", "w"]));
        let top: Vec<(&str, usize)> = table.top(4).into_iter().map(|(k, c)| (k.as_str(), c)).collect();
        assert_eq!(top, vec![("x", 2), ("y", 2), ("z", 1), ("w", 1)]);
    }

    #[test]
    fn top_larger_than_len_returns_all() {
        let table = unigram_frequencies(&toks(&["a", "b", "a"]));
        assert_eq!(table.top(3).len(), 2);
        assert_eq!(table.top(0).len(), 0);
        assert!(FrequencyTable::<String>::new().top(5).is_empty());
    }

    #[test]
    fn trigram_windows() {
        let table = trigram_frequencies(&toks(&["a", "b", "c", "a", "b", "c"]));
        assert_eq!(table.total(), 4);
        assert_eq!(table.get(&Trigram::new("a", "b", "c")), 2);
        assert_eq!(table.get(&Trigram::new("b", "c", "a")), 1);
        assert_eq!(table.get(&Trigram::new("c", "a", "b")), 1);
    }

    #[test]
    fn trigram_total_is_len_minus_two() {
        for n in 0..8usize {
            let tokens: Vec<String> = (0..n).map(|i| format!("t{}", i % 3)).collect();
            let table = trigram_frequencies(&tokens);
            assert_eq!(table.total(), n.saturating_sub(2));
        }
    }

    #[test]
    fn short_input_gives_empty_trigrams() {
        assert!(trigram_frequencies(&toks(&["hi", "there"])).is_empty());
        assert!(trigram_frequencies(&[]).is_empty());
    }

    #[test]
    fn trigram_display_and_json() {
        let t = Trigram::new("fair", "verona", "lay");
        assert_eq!(t.to_string(), "fair verona lay");
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"fair verona lay\"");
        assert_eq!(t.parts()[1], "verona");
    }
}
