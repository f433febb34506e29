//! Text analysis pipeline and per-document analysis snapshot

use crate::config::Config;
use crate::error::Result;
use crate::processing::entities::EntityExtractor;
use crate::processing::frequency::{trigram_frequencies, unigram_frequencies, FrequencyTable, Trigram};
use crate::processing::lexicon::Lexicon;
use crate::processing::normalizer::Normalizer;
use crate::processing::tokenizer::Tokenizer;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::sync::Arc;

pub const SUMMARY_TOP_TOKENS: usize = 20;
pub const SUMMARY_TOP_TRIGRAMS: usize = 10;

/// Configured stages shared by every document analyzed with it.
pub struct Pipeline {
    tokenizer: Tokenizer,
    normalizer: Normalizer,
    extractor: EntityExtractor,
}

impl Default for Pipeline {
    fn default() -> Self {
        let lexicon = Lexicon::standard();
        Self {
            tokenizer: Tokenizer::new(),
            normalizer: Normalizer::new(Default::default(), lexicon.clone(), true),
            extractor: EntityExtractor::new(lexicon, true),
        }
    }
}

impl Pipeline {
    /// Build a pipeline from configuration, rejecting invalid settings.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let lexicon = Arc::new(Lexicon::from_config(&config.analysis, &config.entities));
        Ok(Self {
            tokenizer: Tokenizer::new(),
            normalizer: Normalizer::from_config(&config.analysis, lexicon.clone()),
            extractor: EntityExtractor::from_config(&config.entities, lexicon),
        })
    }

    pub fn with_stopword_filter(mut self, enabled: bool) -> Self {
        self.normalizer.set_stopword_filter(enabled);
        self
    }

    pub fn stopword_filter(&self) -> bool {
        self.normalizer.stopword_filter()
    }

    /// Run every stage over `text` and return the finished snapshot.
    pub fn process(&self, name: impl Into<String>, text: impl Into<String>) -> TextProcessor {
        let name = name.into();
        let raw_text = text.into();

        let tokens = self.tokenizer.tokenize(&raw_text);
        let processed_tokens = self.normalizer.normalize(&tokens);
        let named_entities = self.extractor.extract(&raw_text);
        let token_freq = unigram_frequencies(&processed_tokens);
        let trigram_freq = trigram_frequencies(&processed_tokens);

        if tokens.is_empty() {
            warn!("{}: no alphabetic tokens found", name);
        }
        debug!(
            "{}: {} tokens, {} processed, {} distinct, {} trigrams, {} entities",
            name,
            tokens.len(),
            processed_tokens.len(),
            token_freq.len(),
            trigram_freq.total(),
            named_entities.len()
        );

        TextProcessor {
            name,
            raw_text,
            tokens,
            processed_tokens,
            named_entities,
            token_freq,
            trigram_freq,
        }
    }
}

/// Immutable analysis of one document.
///
/// Everything is computed at construction; afterwards the value is only read.
#[derive(Debug, Clone)]
pub struct TextProcessor {
    name: String,
    raw_text: String,
    tokens: Vec<String>,
    processed_tokens: Vec<String>,
    named_entities: BTreeSet<String>,
    token_freq: FrequencyTable<String>,
    trigram_freq: FrequencyTable<Trigram>,
}

impl TextProcessor {
    /// Analyze with the built-in tables and stop-word filtering on.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_stopword_filter(name, text, true)
    }

    pub fn with_stopword_filter(
        name: impl Into<String>,
        text: impl Into<String>,
        stopword_filter: bool,
    ) -> Self {
        Pipeline::default()
            .with_stopword_filter(stopword_filter)
            .process(name, text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn processed_tokens(&self) -> &[String] {
        &self.processed_tokens
    }

    pub fn named_entities(&self) -> &BTreeSet<String> {
        &self.named_entities
    }

    pub fn token_freq(&self) -> &FrequencyTable<String> {
        &self.token_freq
    }

    pub fn trigram_freq(&self) -> &FrequencyTable<Trigram> {
        &self.trigram_freq
    }

    pub fn top_tokens(&self, n: usize) -> Vec<(&str, usize)> {
        self.token_freq
            .top(n)
            .into_iter()
            .map(|(token, count)| (token.as_str(), count))
            .collect()
    }

    pub fn top_trigrams(&self, k: usize) -> Vec<(&Trigram, usize)> {
        self.trigram_freq.top(k)
    }

    /// Plain-text overview: counts, top 20 tokens, top 10 trigrams, entities.
    pub fn summary(&self) -> String {
        self.summary_with(SUMMARY_TOP_TOKENS, SUMMARY_TOP_TRIGRAMS)
    }

    pub fn summary_with(&self, top_n: usize, top_k: usize) -> String {
        let mut out = String::new();

        out.push_str(&format!("=== {} ===\n", self.name));
        out.push_str(&format!("Total tokens (raw): {}\n", self.tokens.len()));
        out.push_str(&format!("Processed tokens: {}\n", self.processed_tokens.len()));

        let entities: Vec<&str> = self.named_entities.iter().map(String::as_str).collect();
        out.push_str(&format!(
            "Unique named entities ({}): {}\n",
            entities.len(),
            entities.join(", ")
        ));

        out.push_str(&format!("Top {} tokens (after processing):\n", top_n));
        for (token, count) in self.top_tokens(top_n) {
            out.push_str(&format!("  {}: {}\n", token, count));
        }

        out.push_str(&format!("Top {} trigrams:\n", top_k));
        for (trigram, count) in self.top_trigrams(top_k) {
            out.push_str(&format!("  {}: {}\n", trigram, count));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const SCENE: &str = "Romeo loved Juliet. Juliet loved Romeo.";

    #[test]
    fn romeo_and_juliet_scenario() {
        let p = TextProcessor::new("scene", SCENE);

        assert_eq!(
            p.tokens(),
            &["romeo", "loved", "juliet", "juliet", "loved", "romeo"]
        );
        assert!(p.named_entities().contains("Romeo"));
        assert!(p.named_entities().contains("Juliet"));
        assert_eq!(p.token_freq().get("romeo"), 2);
        assert_eq!(p.token_freq().get("juliet"), 2);
        assert_eq!(p.token_freq().total(), p.processed_tokens().len());
        // "loved" -> "lov" -> stemmed, one distinct form
        assert_eq!(p.token_freq().len(), 3);
    }

    #[test]
    fn short_text_has_no_trigrams() {
        let p = TextProcessor::new("short", "Hi there");
        assert!(p.trigram_freq().is_empty());
        assert!(p.top_trigrams(10).is_empty());
    }

    #[test]
    fn top_tokens_capped_at_distinct_count() {
        let p = TextProcessor::new("pair", "sword shield sword");
        assert_eq!(p.token_freq().len(), 2);
        let top = p.top_tokens(3);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ("sword", 2));
    }

    #[test]
    fn empty_text_is_valid() {
        let p = TextProcessor::new("empty", "");
        assert!(p.tokens().is_empty());
        assert!(p.processed_tokens().is_empty());
        assert!(p.named_entities().is_empty());
        assert!(p.token_freq().is_empty());
        assert!(p.trigram_freq().is_empty());
        assert!(p.summary().contains("=== empty ==="));
    }

    #[test]
    fn invariants_hold() {
        let text = "Two households, both alike in dignity, In fair Verona, where we lay our scene, \
                    From ancient grudge break to new mutiny, Where civil blood makes civil hands unclean.";
        for filter in [true, false] {
            let p = TextProcessor::with_stopword_filter("prologue", text, filter);
            assert!(p.processed_tokens().len() <= p.tokens().len());
            assert_eq!(p.token_freq().total(), p.processed_tokens().len());
            assert_eq!(
                p.trigram_freq().total(),
                p.processed_tokens().len().saturating_sub(2)
            );
        }
    }

    #[test]
    fn filter_off_keeps_every_token() {
        let p = TextProcessor::with_stopword_filter("all", "it is the east", false);
        assert_eq!(p.processed_tokens().len(), 4);
        let q = TextProcessor::new("some", "it is the east");
        assert_eq!(q.processed_tokens().len(), 1);
    }

    #[test]
    fn construction_is_deterministic() {
        let a = TextProcessor::new("x", SCENE);
        let b = TextProcessor::new("x", SCENE);
        assert_eq!(a.token_freq(), b.token_freq());
        assert_eq!(a.trigram_freq(), b.trigram_freq());
        assert_eq!(a.named_entities(), b.named_entities());
        assert!(a.token_freq().iter().eq(b.token_freq().iter()));
        assert!(a.trigram_freq().iter().eq(b.trigram_freq().iter()));
    }

    #[test]
    fn configured_pipeline_protects_stop_word() {
        let mut config = Config::default();
        config.analysis.protected_words.push("will".to_string());
        let pipeline = Pipeline::new(&config).unwrap();

        let p = pipeline.process("will", "Will you go? I will.");
        assert_eq!(p.token_freq().get("will"), 2);
    }

    #[test]
    fn invalid_config_fails_at_construction() {
        let mut config = Config::default();
        config.analysis.lemmatizer.es_longer_than = 1;
        assert!(Pipeline::new(&config).is_err());
    }

    #[test]
    fn summary_lists_sections() {
        let p = TextProcessor::new("Text 1", SCENE);
        let s = p.summary();
        assert!(s.starts_with("=== Text 1 ==="));
        assert!(s.contains("Total tokens (raw): 6"));
        assert!(s.contains("Juliet, Romeo"));
        assert!(s.contains("Top 20 tokens"));
        assert!(s.contains("Top 10 trigrams:"));
        assert!(s.contains("  romeo: 2"));
    }
}
