//! Token normalization: lemmatize, filter stop words, stem
//!
//! Each token passes through three fixed steps:
//!
//! 1. **Lemmatize** with the suffix rule table ([`Lemmatizer`]).
//! 2. **Filter** stop words when enabled. Protected words always survive.
//! 3. **Stem** with the Snowball English (Porter2) stemmer.
//!
//! Filtered tokens are dropped from the output, so the processed sequence is
//! never longer than its input and keeps the input order.

use crate::config::AnalysisConfig;
use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::lexicon::Lexicon;
use rust_stemmers::{Algorithm, Stemmer};
use std::sync::Arc;

pub struct Normalizer {
    lemmatizer: Lemmatizer,
    lexicon: Arc<Lexicon>,
    stemmer: Stemmer,
    stopword_filter: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Lemmatizer::default(), Lexicon::standard(), true)
    }
}

impl Normalizer {
    pub fn new(lemmatizer: Lemmatizer, lexicon: Arc<Lexicon>, stopword_filter: bool) -> Self {
        Self {
            lemmatizer,
            lexicon,
            stemmer: Stemmer::create(Algorithm::English),
            stopword_filter,
        }
    }

    pub fn from_config(config: &AnalysisConfig, lexicon: Arc<Lexicon>) -> Self {
        Self::new(
            Lemmatizer::new(&config.lemmatizer),
            lexicon,
            config.stopword_filter,
        )
    }

    pub fn stopword_filter(&self) -> bool {
        self.stopword_filter
    }

    pub fn set_stopword_filter(&mut self, enabled: bool) {
        self.stopword_filter = enabled;
    }

    /// Normalize one lower-case token, or `None` if it is filtered out.
    ///
    /// A token is protected if either its surface form or its lemma is.
    pub fn normalize_token(&self, token: &str) -> Option<String> {
        let lemma = self.lemmatizer.lemmatize(token);

        if self.stopword_filter
            && self.lexicon.is_stop_word(&lemma)
            && !(self.lexicon.is_protected(token) || self.lexicon.is_protected(&lemma))
        {
            return None;
        }

        Some(self.stemmer.stem(&lemma).into_owned())
    }

    pub fn normalize<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|t| self.normalize_token(t.as_ref()))
            .collect()
    }
}
