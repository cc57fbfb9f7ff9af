//! Flesch reading ease and Gunning fog scoring.
//!
//! Sentences are runs of text between `.`, `!` and `?`; words are
//! whitespace-separated tokens. Syllables are estimated from vowel runs.

use crate::common::{char_len, round_to};
use crate::errors::{AnalysisError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub flesch_reading_ease: f64,
    pub gunning_fog_index: f64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
}

#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn calculate_readability(text: &str) -> Result<ReadabilityReport> {
    let total_sentences = SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if total_sentences == 0 || words.is_empty() {
        let err = AnalysisError::degenerate(format!(
            "readability needs at least one sentence and one word (sentences: {}, words: {})",
            total_sentences,
            words.len()
        ));
        tracing::warn!(error = %err, "readability analysis failed");
        return Err(err);
    }

    let total_words = words.len() as f64;
    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = total_words / total_sentences as f64;
    let syllables_per_word = total_syllables as f64 / total_words;

    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let fog = 0.4 * (words_per_sentence + complex_word_percentage(&words));
    let total_chars: usize = words.iter().map(|w| char_len(w)).sum();

    Ok(ReadabilityReport {
        flesch_reading_ease: round_to(flesch, 2),
        gunning_fog_index: round_to(fog, 2),
        avg_sentence_length: round_to(words_per_sentence, 2),
        avg_word_length: round_to(total_chars as f64 / total_words, 2),
    })
}

/// Estimate syllables in a single word; never less than one.
pub fn count_syllables(word: &str) -> usize {
    let word: Vec<char> = word.to_lowercase().chars().collect();
    let is_vowel = |c: &char| VOWELS.contains(c);

    let mut count: i64 = 0;
    let mut on_vowel = false;
    for c in &word {
        let vowel = is_vowel(c);
        if vowel && !on_vowel {
            count += 1;
        }
        on_vowel = vowel;
    }

    if word.last() == Some(&'e') {
        count -= 1;
    }
    let n = word.len();
    if n > 2 && word[n - 2..] == ['l', 'e'] && !is_vowel(&word[n - 3]) {
        count += 1;
    }

    count.max(1) as usize
}

/// Percentage (0-100) of words with three or more syllables.
pub fn complex_word_percentage(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let complex = words.iter().filter(|w| count_syllables(w) >= 3).count();
    complex as f64 / words.len() as f64 * 100.0
}
