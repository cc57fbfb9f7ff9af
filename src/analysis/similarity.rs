//! Verbatim-match probing against an external search backend.
//!
//! Only a small sample of substantial sentences is sent, to stay within the
//! backend's rate limits.

use crate::config::SimilarityConfig;
use crate::errors::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Exact-phrase web search.
pub trait SearchBackend: Send + Sync {
    /// URLs of documents containing `query` verbatim, best first.
    fn exact_matches(&self, query: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub sentence: String,
    pub potential_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub has_matches: bool,
    pub matches: Vec<SimilarityMatch>,
    pub checked_sentences: usize,
    pub matched_sentences: usize,
}

pub struct SimilarityProber {
    backend: Arc<dyn SearchBackend>,
    config: SimilarityConfig,
}

impl SimilarityProber {
    pub fn new(backend: Arc<dyn SearchBackend>, config: SimilarityConfig) -> Self {
        Self { backend, config }
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn check(&self, text: &str) -> Result<SimilarityReport> {
        let sentences: Vec<&str> = SENTENCE_SPLIT
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut matches = Vec::new();
        for sentence in sentences.iter().take(self.config.sample_sentences) {
            if sentence.split_whitespace().count() <= self.config.min_words {
                continue;
            }
            let query = format!("\"{sentence}\"");
            let sources = self.backend.exact_matches(&query).inspect_err(|err| {
                tracing::warn!(error = %err, "similarity backend failed");
            })?;
            if !sources.is_empty() {
                matches.push(SimilarityMatch {
                    sentence: (*sentence).to_string(),
                    potential_sources: sources
                        .into_iter()
                        .take(self.config.max_sources)
                        .collect(),
                });
            }
        }

        Ok(SimilarityReport {
            has_matches: !matches.is_empty(),
            matched_sentences: matches.len(),
            checked_sentences: sentences.len(),
            matches,
        })
    }
}
