//! Configuration management for the literary analyzer

use crate::error::{AnalyzerError, Result};
use crate::processing::comparison::SimilarityMetric;
use crate::processing::lexicon::DEFAULT_PROTECTED_WORDS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub entities: EntityConfig,
    pub comparison: ComparisonConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub stopword_filter: bool,
    /// Terms kept even when they appear in the stop-word list.
    pub protected_words: Vec<String>,
    pub extra_stop_words: Vec<String>,
    pub lemmatizer: LemmatizerConfig,
}

/// Minimum word lengths (exclusive) for each suffix rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LemmatizerConfig {
    pub ies_longer_than: usize,
    pub es_longer_than: usize,
    pub ed_longer_than: usize,
    pub ing_longer_than: usize,
    pub s_longer_than: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityConfig {
    pub skip_sentence_initial: bool,
    pub extra_blacklist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    pub metric: SimilarityMetric,
    pub theme_top_n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub top_tokens: usize,
    pub top_trigrams: usize,
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            entities: EntityConfig::default(),
            comparison: ComparisonConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopword_filter: true,
            protected_words: DEFAULT_PROTECTED_WORDS.iter().map(|w| w.to_string()).collect(),
            extra_stop_words: Vec::new(),
            lemmatizer: LemmatizerConfig::default(),
        }
    }
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        Self {
            ies_longer_than: 4,
            es_longer_than: 3,
            ed_longer_than: 3,
            ing_longer_than: 5,
            s_longer_than: 3,
        }
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            skip_sentence_initial: true,
            extra_blacklist: Vec::new(),
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            metric: SimilarityMetric::Cosine,
            theme_top_n: 50,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_tokens: 20,
            top_trigrams: 10,
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(AnalyzerError::Configuration(format!(
                        "Config file does not exist: {}",
                        explicit.display()
                    )));
                }
                explicit.to_path_buf()
            }
            None => {
                let default_path = Self::config_path();
                if !default_path.exists() {
                    log::debug!("No config at {}, using defaults", default_path.display());
                    return Ok(Self::default());
                }
                default_path
            }
        };

        log::debug!("Loading config from {}", config_path.display());
        let content = std::fs::read_to_string(&config_path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml_string()?)?;
        Ok(config_path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("literary-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let lemma = &self.analysis.lemmatizer;
        let thresholds = [
            ("ies_longer_than", lemma.ies_longer_than, "ies"),
            ("es_longer_than", lemma.es_longer_than, "es"),
            ("ed_longer_than", lemma.ed_longer_than, "ed"),
            ("ing_longer_than", lemma.ing_longer_than, "ing"),
            ("s_longer_than", lemma.s_longer_than, "s"),
        ];
        for (key, value, suffix) in thresholds {
            if value < suffix.len() {
                return Err(AnalyzerError::Configuration(format!(
                    "analysis.lemmatizer.{} must be at least {} (length of \"{}\"), got {}",
                    key,
                    suffix.len(),
                    suffix,
                    value
                )));
            }
        }

        check_words("analysis.protected_words", &self.analysis.protected_words)?;
        check_words("analysis.extra_stop_words", &self.analysis.extra_stop_words)?;
        check_words("entities.extra_blacklist", &self.entities.extra_blacklist)?;

        if self.comparison.theme_top_n == 0 {
            return Err(AnalyzerError::Configuration(
                "comparison.theme_top_n must be greater than zero".to_string(),
            ));
        }
        if self.report.top_tokens == 0 || self.report.top_trigrams == 0 {
            return Err(AnalyzerError::Configuration(
                "report.top_tokens and report.top_trigrams must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Lexicon entries must be plain ASCII words, or they could never match a token.
fn check_words(key: &str, words: &[String]) -> Result<()> {
    for word in words {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(AnalyzerError::Configuration(format!(
                "{} contains an invalid entry {:?}: expected ASCII letters only",
                key, word
            )));
        }
    }
    Ok(())
}
