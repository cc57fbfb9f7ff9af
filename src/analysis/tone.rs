//! Document tone and sentiment distribution.

use crate::common::round_to;
use crate::errors::{AnalysisError, Result};
use crate::text::{ensure_ready, Sentiment, SentimentScorer, TextStructure};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sentences beyond this absolute polarity are reported individually
const SIGNIFICANT_POLARITY: f64 = 0.3;
/// Distribution buckets: above this is positive, below its negation negative
const DISTRIBUTION_POLARITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneDistribution {
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneVariation {
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingStyle {
    pub objectivity: Level,
    pub tone_consistency: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneReport {
    pub overall_sentiment: Sentiment,
    pub tone_distribution: ToneDistribution,
    pub significant_tone_variations: Vec<ToneVariation>,
    pub writing_style: WritingStyle,
}

pub struct ToneAnalyzer {
    structure: Arc<dyn TextStructure>,
    scorer: Arc<dyn SentimentScorer>,
}

impl ToneAnalyzer {
    pub fn new(
        structure: Arc<dyn TextStructure>,
        scorer: Arc<dyn SentimentScorer>,
    ) -> Result<Self> {
        ensure_ready(structure.as_ref())?;
        Ok(Self { structure, scorer })
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<ToneReport> {
        self.analyze_inner(text).inspect_err(|err| {
            tracing::warn!(error = %err, "tone analysis failed");
        })
    }

    fn analyze_inner(&self, text: &str) -> Result<ToneReport> {
        let sentences = self.structure.sentences(text);
        if sentences.is_empty() {
            return Err(AnalysisError::degenerate(
                "tone analysis needs at least one sentence",
            ));
        }

        let overall = self.scorer.sentiment(text)?;
        let scored = sentences
            .iter()
            .map(|s| self.scorer.sentiment(s).map(|score| (s, score)))
            .collect::<Result<Vec<_>>>()?;

        let significant: Vec<ToneVariation> = scored
            .iter()
            .filter(|(_, score)| score.polarity.abs() > SIGNIFICANT_POLARITY)
            .map(|(sentence, score)| ToneVariation {
                text: (*sentence).clone(),
                polarity: round_to(score.polarity, 2),
                subjectivity: round_to(score.subjectivity, 2),
                tone: if score.polarity > 0.0 {
                    Tone::Positive
                } else {
                    Tone::Negative
                },
            })
            .collect();

        let total = scored.len();
        let positive = scored
            .iter()
            .filter(|(_, s)| s.polarity > DISTRIBUTION_POLARITY)
            .count();
        let negative = scored
            .iter()
            .filter(|(_, s)| s.polarity < -DISTRIBUTION_POLARITY)
            .count();
        let neutral = total - positive - negative;
        let pct = |count: usize| round_to(count as f64 / total as f64 * 100.0, 1);

        let writing_style = WritingStyle {
            objectivity: classify_objectivity(overall.subjectivity),
            tone_consistency: classify_consistency(significant.len(), total),
        };

        Ok(ToneReport {
            overall_sentiment: Sentiment {
                polarity: round_to(overall.polarity, 2),
                subjectivity: round_to(overall.subjectivity, 2),
            },
            tone_distribution: ToneDistribution {
                positive_percentage: pct(positive),
                negative_percentage: pct(negative),
                neutral_percentage: pct(neutral),
            },
            significant_tone_variations: significant,
            writing_style,
        })
    }
}

fn classify_objectivity(subjectivity: f64) -> Level {
    if subjectivity < 0.3 {
        Level::High
    } else if subjectivity < 0.6 {
        Level::Medium
    } else {
        Level::Low
    }
}

fn classify_consistency(significant: usize, total: usize) -> Level {
    let significant = significant as f64;
    let total = total as f64;
    if significant < total * 0.1 {
        Level::High
    } else if significant < total * 0.2 {
        Level::Medium
    } else {
        Level::Low
    }
}
