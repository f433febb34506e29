//! Cross-document comparison: thematic overlap and authorship attribution

use crate::processing::frequency::FrequencyTable;
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Similarity between two frequency tables, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    /// Cosine of the angle between the count vectors.
    #[default]
    Cosine,
    /// Shared mass over the smaller table: Σ min(a, b) / min(|a|, |b|).
    Overlap,
    /// Weighted Jaccard: Σ min(a, b) / Σ max(a, b).
    Jaccard,
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Overlap => "overlap",
            SimilarityMetric::Jaccard => "jaccard",
        };
        f.write_str(name)
    }
}

impl FromStr for SimilarityMetric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(SimilarityMetric::Cosine),
            "overlap" => Ok(SimilarityMetric::Overlap),
            "jaccard" => Ok(SimilarityMetric::Jaccard),
            _ => Err(format!(
                "Invalid similarity metric: {}. Supported: cosine, overlap, jaccard",
                s
            )),
        }
    }
}

/// Score two tables. Either table being empty scores `0.0`.
///
/// Sums run over `a` in its insertion order, so identical inputs always
/// produce bit-identical scores.
pub fn similarity<K: Hash + Eq>(
    a: &FrequencyTable<K>,
    b: &FrequencyTable<K>,
    metric: SimilarityMetric,
) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    match metric {
        SimilarityMetric::Cosine => {
            let dot: f64 = a
                .iter()
                .map(|(key, count)| (count * b.get(key)) as f64)
                .sum();
            let norm_a = a.iter().map(|(_, c)| (c * c) as f64).sum::<f64>().sqrt();
            let norm_b = b.iter().map(|(_, c)| (c * c) as f64).sum::<f64>().sqrt();
            dot / (norm_a * norm_b)
        }
        SimilarityMetric::Overlap => {
            let shared = shared_mass(a, b);
            shared as f64 / a.total().min(b.total()) as f64
        }
        SimilarityMetric::Jaccard => {
            let shared = shared_mass(a, b);
            // Σ max(a, b) = |a| + |b| - Σ min(a, b)
            let union = a.total() + b.total() - shared;
            shared as f64 / union as f64
        }
    }
}

fn shared_mass<K: Hash + Eq>(a: &FrequencyTable<K>, b: &FrequencyTable<K>) -> usize {
    a.iter().map(|(key, count)| count.min(b.get(key))).sum()
}

/// Unigram similarity between two named documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSimilarity {
    pub first: String,
    pub second: String,
    pub score: f64,
}

/// Themes shared by a group of documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThematicOverlap {
    pub documents: Vec<String>,
    pub top_n: usize,
    /// Tokens in every document's top `top_n`, in the first document's ranking order.
    pub shared_tokens: Vec<String>,
    /// Entities found in every document, sorted.
    pub shared_entities: Vec<String>,
    pub pairwise: Vec<PairSimilarity>,
    pub metric: SimilarityMetric,
}

pub fn thematic_overlap(
    documents: &[&TextProcessor],
    top_n: usize,
    metric: SimilarityMetric,
) -> ThematicOverlap {
    let names = documents.iter().map(|d| d.name().to_string()).collect();

    let shared_tokens = match documents.split_first() {
        Some((first, rest)) => {
            let rest_tops: Vec<BTreeSet<&str>> = rest
                .iter()
                .map(|d| d.top_tokens(top_n).into_iter().map(|(t, _)| t).collect())
                .collect();
            first
                .top_tokens(top_n)
                .into_iter()
                .map(|(token, _)| token)
                .filter(|token| rest_tops.iter().all(|top| top.contains(token)))
                .map(str::to_string)
                .collect()
        }
        None => Vec::new(),
    };

    let shared_entities = match documents.split_first() {
        Some((first, rest)) => first
            .named_entities()
            .iter()
            .filter(|e| rest.iter().all(|d| d.named_entities().contains(*e)))
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    let mut pairwise = Vec::new();
    for (i, a) in documents.iter().enumerate() {
        for b in &documents[i + 1..] {
            pairwise.push(PairSimilarity {
                first: a.name().to_string(),
                second: b.name().to_string(),
                score: similarity(a.token_freq(), b.token_freq(), metric),
            });
        }
    }

    ThematicOverlap {
        documents: names,
        top_n,
        shared_tokens,
        shared_entities,
        pairwise,
        metric,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributionScore {
    pub reference: String,
    pub score: f64,
    pub shared_trigrams: usize,
}

/// Trigram-based authorship attribution of one candidate text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribution {
    pub candidate: String,
    pub metric: SimilarityMetric,
    /// Highest score first; equal scores keep reference order.
    pub scores: Vec<AttributionScore>,
}

impl Attribution {
    /// The best-matching reference, if any references were given.
    pub fn attributed(&self) -> Option<&AttributionScore> {
        self.scores.first()
    }
}

pub fn attribute_authorship(
    candidate: &TextProcessor,
    references: &[&TextProcessor],
    metric: SimilarityMetric,
) -> Attribution {
    let mut scores: Vec<AttributionScore> = references
        .iter()
        .map(|reference| {
            let shared_trigrams = reference
                .trigram_freq()
                .iter()
                .filter(|(t, _)| candidate.trigram_freq().contains(*t))
                .count();
            AttributionScore {
                reference: reference.name().to_string(),
                score: similarity(candidate.trigram_freq(), reference.trigram_freq(), metric),
                shared_trigrams,
            }
        })
        .collect();

    scores.sort_by(|a, b| b.score.total_cmp(&a.score));

    log::debug!(
        "attribution for {}: {:?}",
        candidate.name(),
        scores.iter().map(|s| (&s.reference, s.score)).collect::<Vec<_>>()
    );

    Attribution {
        candidate: candidate.name().to_string(),
        metric,
        scores,
    }
}
