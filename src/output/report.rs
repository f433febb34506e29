//! Serializable report structures

use crate::processing::comparison::{Attribution, ThematicOverlap};
use crate::processing::text_processor::TextProcessor;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Complete result of one CLI run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,

    /// One entry per analyzed document, in input order
    pub documents: Vec<DocumentReport>,

    /// Themes shared by the compared documents
    pub thematic_overlap: Option<ThematicOverlap>,

    /// Trigram-based attribution of a candidate text
    pub attribution: Option<Attribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub stopword_filter: bool,
}

/// Reportable view of a [`TextProcessor`].
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub name: String,
    pub token_count: usize,
    pub processed_token_count: usize,
    pub distinct_tokens: usize,
    pub trigram_count: usize,
    pub top_tokens: Vec<TokenCount>,
    pub top_trigrams: Vec<TrigramCount>,
    pub named_entities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrigramCount {
    pub trigram: String,
    pub count: usize,
}

impl DocumentReport {
    pub fn from_processor(processor: &TextProcessor, top_tokens: usize, top_trigrams: usize) -> Self {
        Self {
            name: processor.name().to_string(),
            token_count: processor.tokens().len(),
            processed_token_count: processor.processed_tokens().len(),
            distinct_tokens: processor.token_freq().len(),
            trigram_count: processor.trigram_freq().total(),
            top_tokens: processor
                .top_tokens(top_tokens)
                .into_iter()
                .map(|(token, count)| TokenCount {
                    token: token.to_string(),
                    count,
                })
                .collect(),
            top_trigrams: processor
                .top_trigrams(top_trigrams)
                .into_iter()
                .map(|(trigram, count)| TrigramCount {
                    trigram: trigram.to_string(),
                    count,
                })
                .collect(),
            named_entities: processor.named_entities().iter().cloned().collect(),
        }
    }
}

impl AnalysisReport {
    pub fn new(documents: Vec<DocumentReport>, stopword_filter: bool) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                stopword_filter,
            },
            documents,
            thematic_overlap: None,
            attribution: None,
        }
    }

    pub fn with_thematic_overlap(mut self, overlap: ThematicOverlap) -> Self {
        self.thematic_overlap = Some(overlap);
        self
    }

    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// One-line findings derived from the comparison sections.
    pub fn conclusions(&self) -> Vec<String> {
        let mut out = Vec::new();

        if let Some(overlap) = &self.thematic_overlap {
            if overlap.shared_tokens.is_empty() && overlap.shared_entities.is_empty() {
                out.push(format!(
                    "{} share no prominent tokens or entities.",
                    overlap.documents.join(", ")
                ));
            } else {
                let mut themes: Vec<&str> = overlap.shared_entities.iter().map(String::as_str).collect();
                themes.extend(overlap.shared_tokens.iter().take(10).map(String::as_str));
                out.push(format!(
                    "{} share common themes: {}.",
                    overlap.documents.join(", "),
                    themes.join(", ")
                ));
            }
        }

        if let Some(attribution) = &self.attribution {
            match attribution.attributed() {
                Some(best) if best.score > 0.0 => out.push(format!(
                    "{} shares the most trigrams with {} ({} similarity {:.3}); attributed to the author of {}.",
                    attribution.candidate, best.reference, attribution.metric, best.score, best.reference
                )),
                Some(_) => out.push(format!(
                    "{} shares no trigrams with any reference text; no attribution.",
                    attribution.candidate
                )),
                None => out.push(format!(
                    "No reference texts were given for {}.",
                    attribution.candidate
                )),
            }
        }

        out
    }
}
