//! Lexicon-based sentiment scoring.
//!
//! Each known word carries a (polarity, subjectivity) pair. A preceding
//! intensifier scales the pair; a negation within the two previous tokens
//! flips polarity and halves it. The score of a text is the mean over the
//! words found in the lexicon, or neutral when none are.

use super::{Sentiment, SentimentScorer};
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    [
        ("good", (0.7, 0.6)),
        ("great", (0.8, 0.75)),
        ("excellent", (1.0, 1.0)),
        ("amazing", (0.6, 0.9)),
        ("awesome", (1.0, 1.0)),
        ("wonderful", (1.0, 1.0)),
        ("perfect", (1.0, 1.0)),
        ("best", (1.0, 0.3)),
        ("better", (0.5, 0.5)),
        ("nice", (0.6, 1.0)),
        ("easy", (0.43, 0.83)),
        ("helpful", (0.5, 0.5)),
        ("useful", (0.3, 0.0)),
        ("powerful", (0.3, 1.0)),
        ("fast", (0.2, 0.6)),
        ("efficient", (0.4, 0.5)),
        ("reliable", (0.4, 0.5)),
        ("robust", (0.4, 0.5)),
        ("clean", (0.37, 0.69)),
        ("clear", (0.1, 0.38)),
        ("happy", (0.8, 1.0)),
        ("love", (0.5, 0.6)),
        ("beautiful", (0.85, 1.0)),
        ("elegant", (0.5, 0.8)),
        ("intuitive", (0.4, 0.6)),
        ("convenient", (0.3, 0.5)),
        ("important", (0.4, 1.0)),
        ("bad", (-0.7, 0.67)),
        ("terrible", (-1.0, 1.0)),
        ("awful", (-1.0, 1.0)),
        ("horrible", (-1.0, 1.0)),
        ("worst", (-1.0, 1.0)),
        ("worse", (-0.4, 0.6)),
        ("poor", (-0.4, 0.6)),
        ("wrong", (-0.5, 0.9)),
        ("broken", (-0.4, 0.4)),
        ("buggy", (-0.5, 0.6)),
        ("slow", (-0.3, 0.39)),
        ("difficult", (-0.5, 1.0)),
        ("hard", (-0.29, 0.54)),
        ("confusing", (-0.3, 0.7)),
        ("annoying", (-0.8, 0.9)),
        ("ugly", (-0.7, 1.0)),
        ("hate", (-0.8, 0.9)),
        ("fail", (-0.5, 0.3)),
        ("failed", (-0.5, 0.3)),
        ("failure", (-0.3, 0.3)),
        ("dangerous", (-0.6, 0.9)),
        ("insecure", (-0.5, 0.7)),
        ("unstable", (-0.4, 0.6)),
        ("painful", (-0.7, 0.9)),
        ("frustrating", (-0.4, 0.7)),
        ("useless", (-0.5, 0.2)),
        ("complex", (-0.3, 0.4)),
        ("simple", (0.0, 0.36)),
        ("new", (0.14, 0.45)),
        ("old", (0.1, 0.2)),
        ("large", (0.21, 0.43)),
        ("small", (-0.25, 0.4)),
        ("possible", (0.0, 1.0)),
        ("probably", (0.0, 0.5)),
        ("really", (0.2, 0.2)),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("highly", 1.3),
        ("quite", 1.1),
        ("so", 1.2),
        ("too", 1.2),
        ("slightly", 0.8),
        ("somewhat", 0.8),
    ]
    .into_iter()
    .collect()
});

const NEGATIONS: &[&str] = &["not", "never", "no", "nothing", "hardly", "cannot"];

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Lazy::force(&LEXICON);
        Lazy::force(&INTENSIFIERS);
        Self
    }

    fn score(&self, text: &str) -> Sentiment {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|t| {
                t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_lowercase()
            })
            .filter(|t| !t.is_empty())
            .collect();

        let mut scored = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let Some(&(mut polarity, mut subjectivity)) = LEXICON.get(token.as_str()) else {
                continue;
            };
            // An intensifier that is itself scored only scales its neighbour.
            if i + 1 < tokens.len() && INTENSIFIERS.contains_key(token.as_str()) {
                continue;
            }
            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|p| INTENSIFIERS.get(tokens[p].as_str()))
            {
                polarity = (polarity * factor).clamp(-1.0, 1.0);
                subjectivity = (subjectivity * factor).clamp(0.0, 1.0);
            }
            let negated = tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|t| NEGATIONS.contains(&t.as_str()) || t.ends_with("n't"));
            if negated {
                polarity *= -0.5;
            }
            scored.push((polarity, subjectivity));
        }

        if scored.is_empty() {
            return Sentiment::default();
        }
        let n = scored.len() as f64;
        Sentiment {
            polarity: (scored.iter().map(|(p, _)| p).sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (scored.iter().map(|(_, s)| s).sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}

impl SentimentScorer for LexiconSentiment {
    fn sentiment(&self, text: &str) -> Result<Sentiment> {
        Ok(self.score(text))
    }
}
