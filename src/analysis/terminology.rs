//! Technical terminology consistency.
//!
//! Nouns longer than three characters are candidate terms. Each term is then
//! used as a case-insensitive stem over the whole text; more than one distinct
//! spelling of that stem is reported as an inconsistency.

use crate::errors::{AnalysisError, Result};
use crate::text::{ensure_ready, TextStructure};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

const NOUN_TAGS: &[&str] = &["NN", "NNP"];
const MIN_TERM_CHARS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermInconsistency {
    pub term: String,
    pub variations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminologyReport {
    /// Every candidate term with its exact-case frequency, first-seen order
    pub technical_terms: Vec<(String, usize)>,
    pub inconsistencies: Vec<TermInconsistency>,
    pub term_count: usize,
    pub unique_terms: usize,
}

pub struct TerminologyChecker {
    structure: Arc<dyn TextStructure>,
}

impl TerminologyChecker {
    pub fn new(structure: Arc<dyn TextStructure>) -> Result<Self> {
        ensure_ready(structure.as_ref())?;
        Ok(Self { structure })
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn validate(&self, text: &str) -> Result<TerminologyReport> {
        self.validate_inner(text).inspect_err(|err| {
            tracing::warn!(error = %err, "terminology validation failed");
        })
    }

    fn validate_inner(&self, text: &str) -> Result<TerminologyReport> {
        let words = self.structure.words(text);
        let tags = self.structure.pos_tags(&words)?;
        if tags.len() != words.len() {
            return Err(AnalysisError::capability(
                "pos_tagger",
                format!("expected {} tags, got {}", words.len(), tags.len()),
            ));
        }

        let mut technical_terms: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut term_count = 0;

        for (word, tag) in words.iter().zip(&tags) {
            if !NOUN_TAGS.contains(&tag.as_str()) || word.chars().count() < MIN_TERM_CHARS {
                continue;
            }
            term_count += 1;
            match index.get(word.as_str()) {
                Some(&slot) => technical_terms[slot].1 += 1,
                None => {
                    index.insert(word.as_str(), technical_terms.len());
                    technical_terms.push((word.clone(), 1));
                }
            }
        }

        let mut inconsistencies = Vec::new();
        for (term, _) in &technical_terms {
            let variations = find_term_variations(text, term)?;
            if variations.len() > 1 {
                inconsistencies.push(TermInconsistency {
                    term: term.clone(),
                    variations,
                });
            }
        }

        tracing::debug!(
            terms = technical_terms.len(),
            inconsistencies = inconsistencies.len(),
            "terminology validated"
        );

        Ok(TerminologyReport {
            unique_terms: technical_terms.len(),
            technical_terms,
            inconsistencies,
            term_count,
        })
    }
}

/// Distinct exact spellings of `term` used as a stem, in discovery order.
pub fn find_term_variations(text: &str, term: &str) -> Result<Vec<String>> {
    let pattern = RegexBuilder::new(&format!(r"\b{}\w*", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .map_err(|e| AnalysisError::capability("regex", e.to_string()))?;

    let mut variations: Vec<String> = Vec::new();
    for found in pattern.find_iter(text) {
        if !variations.iter().any(|v| v == found.as_str()) {
            variations.push(found.as_str().to_string());
        }
    }
    Ok(variations)
}
