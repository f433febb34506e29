//! Text processing and analysis module

pub mod comparison;
pub mod entities;
pub mod frequency;
pub mod lemmatizer;
pub mod lexicon;
pub mod normalizer;
pub mod text_processor;
pub mod tokenizer;

pub use comparison::{attribute_authorship, similarity, thematic_overlap, SimilarityMetric};
pub use frequency::{FrequencyTable, Trigram};
pub use text_processor::{Pipeline, TextProcessor};
