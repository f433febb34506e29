//! Rule-based suffix lemmatizer
//!
//! An ordered decision table of suffix rules. The first rule whose
//! predicate matches rewrites the word; if none match the word is returned
//! unchanged. Only one rule ever fires per word.

use crate::config::LemmatizerConfig;

/// One row of the lemmatizer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    /// The word must be strictly longer than this.
    pub longer_than: usize,
    /// The rule is skipped when the word ends with this.
    pub unless_suffix: Option<&'static str>,
    /// Number of trailing bytes removed.
    pub strip: usize,
    /// Appended after stripping.
    pub append: &'static str,
}

impl SuffixRule {
    pub fn matches(&self, word: &str) -> bool {
        word.len() > self.longer_than
            && word.ends_with(self.suffix)
            && !self.unless_suffix.is_some_and(|s| word.ends_with(s))
    }

    pub fn apply(&self, word: &str) -> String {
        let stem = &word[..word.len() - self.strip];
        let mut out = String::with_capacity(stem.len() + self.append.len());
        out.push_str(stem);
        out.push_str(self.append);
        out
    }
}

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    rules: Vec<SuffixRule>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(&LemmatizerConfig::default())
    }
}

impl Lemmatizer {
    pub fn new(config: &LemmatizerConfig) -> Self {
        let rules = vec![
            // flies -> fly
            SuffixRule {
                suffix: "ies",
                longer_than: config.ies_longer_than,
                unless_suffix: None,
                strip: 3,
                append: "y",
            },
            // Plural "-es" only loses the "s": houses -> house, foxes -> foxe.
            SuffixRule {
                suffix: "es",
                longer_than: config.es_longer_than,
                unless_suffix: None,
                strip: 1,
                append: "",
            },
            // Doubled consonants are left alone: stopped -> stopp.
            SuffixRule {
                suffix: "ed",
                longer_than: config.ed_longer_than,
                unless_suffix: None,
                strip: 2,
                append: "",
            },
            SuffixRule {
                suffix: "ing",
                longer_than: config.ing_longer_than,
                unless_suffix: None,
                strip: 3,
                append: "",
            },
            SuffixRule {
                suffix: "s",
                longer_than: config.s_longer_than,
                unless_suffix: Some("ss"),
                strip: 1,
                append: "",
            },
        ];

        Self { rules }
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    /// Lemmatize a lower-case ASCII word.
    pub fn lemmatize(&self, word: &str) -> String {
        match self.rules.iter().find(|rule| rule.matches(word)) {
            Some(rule) => rule.apply(word),
            None => word.to_string(),
        }
    }
}
