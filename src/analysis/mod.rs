//! Natural-language analyzers: readability, terminology, tone and
//! similarity probing.
//!
//! [`DocumentAnalyzer`] bundles the text analyzers behind one set of injected
//! capabilities. Each analyzer is also usable on its own.

pub mod readability;
pub mod similarity;
pub mod terminology;
pub mod tone;

pub use readability::{calculate_readability, count_syllables, ReadabilityReport};
pub use similarity::{SearchBackend, SimilarityProber, SimilarityReport};
pub use terminology::{TermInconsistency, TerminologyChecker, TerminologyReport};
pub use tone::{ToneAnalyzer, ToneReport};

use crate::errors::Result;
use crate::text::{LexiconSentiment, PlainTextStructure, SentimentScorer, TextStructure};
use std::sync::Arc;

pub struct DocumentAnalyzer {
    terminology: TerminologyChecker,
    tone: ToneAnalyzer,
}

impl DocumentAnalyzer {
    pub fn new(
        structure: Arc<dyn TextStructure>,
        scorer: Arc<dyn SentimentScorer>,
    ) -> Result<Self> {
        Ok(Self {
            terminology: TerminologyChecker::new(Arc::clone(&structure))?,
            tone: ToneAnalyzer::new(structure, scorer)?,
        })
    }

    /// Analyzer wired to the built-in rule-based tagger and sentiment lexicon
    pub fn with_defaults() -> Result<Self> {
        Self::new(
            Arc::new(PlainTextStructure::new()),
            Arc::new(LexiconSentiment::new()),
        )
    }

    pub fn readability(&self, text: &str) -> Result<ReadabilityReport> {
        calculate_readability(text)
    }

    pub fn terminology(&self, text: &str) -> Result<TerminologyReport> {
        self.terminology.validate(text)
    }

    pub fn tone(&self, text: &str) -> Result<ToneReport> {
        self.tone.analyze(text)
    }
}
