//! Text-structure and sentiment capabilities.
//!
//! Analyzers receive these as `Arc<dyn ...>` at construction and never fetch
//! them mid-call. The defaults in [`structure`] and [`sentiment`] are
//! rule/lexicon based and need no external data.

pub mod sentiment;
pub mod structure;
pub mod tagger;

use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

pub use sentiment::LexiconSentiment;
pub use structure::PlainTextStructure;
pub use tagger::RuleBasedTagger;

/// Sentence/word segmentation and part-of-speech tagging.
///
/// Implementations must be deterministic and order-preserving.
pub trait TextStructure: Send + Sync {
    fn sentences(&self, text: &str) -> Vec<String>;

    fn words(&self, text: &str) -> Vec<String>;

    /// One Penn Treebank style tag per token, same length and order.
    fn pos_tags(&self, tokens: &[String]) -> Result<Vec<String>>;

    /// Readiness check performed once at analyzer construction.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Polarity in [-1, 1], subjectivity in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub trait SentimentScorer: Send + Sync {
    fn sentiment(&self, text: &str) -> Result<Sentiment>;
}

pub(crate) fn ensure_ready(structure: &dyn TextStructure) -> Result<()> {
    if structure.is_ready() {
        Ok(())
    } else {
        Err(AnalysisError::capability(
            "text_structure",
            "text structure capability reported not ready",
        ))
    }
}
