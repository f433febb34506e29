//! Heuristic named-entity extraction
//!
//! A word counts as a candidate proper noun when it starts with an uppercase
//! ASCII letter, does not open a sentence, and is not on the blacklist of
//! words that are routinely capitalized for other reasons. Sentence
//! boundaries come from Unicode sentence segmentation, so the first word of
//! the text and any word following `.`, `!` or `?` (or a paragraph break)
//! is ambiguous and skipped.

use crate::config::EntityConfig;
use crate::processing::lexicon::Lexicon;
use crate::processing::tokenizer::Tokenizer;
use std::collections::BTreeSet;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct EntityExtractor {
    tokenizer: Tokenizer,
    lexicon: Arc<Lexicon>,
    skip_sentence_initial: bool,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(Lexicon::standard(), true)
    }
}

impl EntityExtractor {
    pub fn new(lexicon: Arc<Lexicon>, skip_sentence_initial: bool) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lexicon,
            skip_sentence_initial,
        }
    }

    pub fn from_config(config: &EntityConfig, lexicon: Arc<Lexicon>) -> Self {
        Self::new(lexicon, config.skip_sentence_initial)
    }

    /// Unique surface forms, case preserved, in sorted order.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut entities = BTreeSet::new();

        for sentence in text.unicode_sentences() {
            let skip = usize::from(self.skip_sentence_initial);
            for word in self.tokenizer.words(sentence).skip(skip) {
                if self.is_candidate(word) {
                    entities.insert(word.to_string());
                }
            }
        }

        entities
    }

    fn is_candidate(&self, word: &str) -> bool {
        word.as_bytes()
            .first()
            .is_some_and(|b| b.is_ascii_uppercase())
            && !self.lexicon.is_blacklisted(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> BTreeSet<String> {
        EntityExtractor::default().extract(text)
    }

    #[test]
    fn finds_names_mid_sentence() {
        let out = extract("Romeo loved Juliet. Juliet loved Romeo.");
        assert!(out.contains("Romeo"));
        assert!(out.contains("Juliet"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn sentence_initial_words_skipped() {
        let out = extract("Tonight we ride. Beneath the walls of Verona we wait!");
        assert!(!out.contains("Tonight"));
        assert!(!out.contains("Beneath"));
        assert!(out.contains("Verona"));
    }

    #[test]
    fn sentence_initial_kept_when_disabled() {
        let extractor = EntityExtractor::new(Lexicon::standard(), false);
        let out = extractor.extract("Tybalt draws. Mercutio falls.");
        assert!(out.contains("Tybalt"));
        assert!(out.contains("Mercutio"));
    }

    #[test]
    fn blacklisted_words_never_returned() {
        let extractor = EntityExtractor::new(Lexicon::standard(), false);
        let out = extractor.extract("The night and The Day. And I said, Thou art As fair. THE end.");
        for word in &out {
            assert!(!Lexicon::standard().is_blacklisted(word), "{}", word);
        }
        assert!(out.contains("Day"));
        assert!(!out.contains("THE"));
    }

    #[test]
    fn lowercase_text_has_no_entities() {
        assert!(extract("no capital letters anywhere in here").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn duplicates_collapse_case_preserved() {
        let out = extract("We met Paris. We met Paris again, and PARIS too.");
        assert!(out.contains("Paris"));
        assert!(out.contains("PARIS"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn punctuation_delimits_words() {
        let out = extract("Then came Lady Capulet's nurse, and Friar-Laurence.");
        assert!(out.contains("Lady"));
        assert!(out.contains("Capulet"));
        assert!(out.contains("Friar"));
        assert!(out.contains("Laurence"));
    }
}
