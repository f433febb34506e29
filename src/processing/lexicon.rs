//! Word lists shared by the normalizer and the entity extractor
//!
//! The tables are immutable. A [`Lexicon`] is assembled once (optionally
//! extended from configuration) and handed to every pipeline stage that
//! needs it behind an `Arc`.

use crate::config::{AnalysisConfig, EntityConfig};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// Standard English stop words. Contracted forms are listed by their
/// letter-only fragments, which is all the tokenizer can produce.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her",
    "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "this", "that", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if",
    "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now", "d", "ll", "m",
    "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn", "hasn",
    "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
    "weren", "won", "wouldn",
];

/// Key names of the compared texts; never removed as stop words.
pub const DEFAULT_PROTECTED_WORDS: &[&str] = &["romeo", "juliet", "verona"];

/// Words often capitalized for reasons other than being a name:
/// sentence-initial function words, pronouns, interjections and archaic
/// forms common in verse. Stored lower-case.
pub const ENTITY_BLACKLIST: &[&str] = &[
    "the", "and", "in", "a", "but", "as", "with", "for", "to", "at", "on",
    "i", "he", "she", "it", "we", "they", "you", "me", "him", "her", "us", "them",
    "my", "his", "its", "our", "their", "your", "this", "that", "these", "those",
    "o", "oh", "ah", "alas", "lo", "yes", "no", "nay", "yea", "aye",
    "thou", "thee", "thy", "thine", "ye",
    "if", "when", "then", "so", "or", "nor", "not", "now", "of", "is", "be",
    "what", "why", "how", "where", "who", "which", "there", "here", "all", "let",
];

/// Immutable word tables consulted by the pipeline.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    protected: HashSet<String>,
    entity_blacklist: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::build::<&str, &str, &str>(&[], DEFAULT_PROTECTED_WORDS, &[])
    }
}

impl Lexicon {
    /// The built-in tables, constructed on first use and shared afterwards.
    pub fn standard() -> Arc<Lexicon> {
        static STANDARD: OnceLock<Arc<Lexicon>> = OnceLock::new();
        STANDARD.get_or_init(|| Arc::new(Lexicon::default())).clone()
    }

    /// Built-in tables extended with the configured words.
    pub fn from_config(analysis: &AnalysisConfig, entities: &EntityConfig) -> Self {
        Self::build(
            &analysis.extra_stop_words,
            &analysis.protected_words,
            &entities.extra_blacklist,
        )
    }

    fn build<A, B, C>(extra_stop_words: &[A], protected: &[B], extra_blacklist: &[C]) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
        C: AsRef<str>,
    {
        let stop_words = ENGLISH_STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_stop_words.iter().map(|w| w.as_ref().to_ascii_lowercase()))
            .collect();

        let protected = protected
            .iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();

        let entity_blacklist = ENTITY_BLACKLIST
            .iter()
            .map(|w| w.to_string())
            .chain(extra_blacklist.iter().map(|w| w.as_ref().to_ascii_lowercase()))
            .collect();

        Self {
            stop_words,
            protected,
            entity_blacklist,
        }
    }

    /// `word` must already be lower-case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// `word` must already be lower-case.
    pub fn is_protected(&self, word: &str) -> bool {
        self.protected.contains(word)
    }

    /// Case-insensitive blacklist check for entity candidates.
    pub fn is_blacklisted(&self, word: &str) -> bool {
        self.entity_blacklist.contains(&word.to_ascii_lowercase())
    }

    pub fn protected_words(&self) -> impl Iterator<Item = &str> {
        self.protected.iter().map(String::as_str)
    }
}
