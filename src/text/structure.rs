//! Default text-structure capability: regex segmentation plus the
//! rule-based tagger.

use super::tagger::RuleBasedTagger;
use super::TextStructure;
use crate::errors::Result;
use once_cell::sync::Lazy;
use regex::Regex;

// A sentence is a run of non-terminators plus its terminator run, if any.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+(?:[.!?]+|$)").expect("valid sentence regex"));

#[derive(Debug, Default, Clone)]
pub struct PlainTextStructure {
    tagger: RuleBasedTagger,
}

impl PlainTextStructure {
    pub fn new() -> Self {
        Lazy::force(&SENTENCE_RE);
        Self {
            tagger: RuleBasedTagger::new(),
        }
    }
}

impl TextStructure for PlainTextStructure {
    fn sentences(&self, text: &str) -> Vec<String> {
        SENTENCE_RE
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .map(str::to_string)
            .collect()
    }

    fn words(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn pos_tags(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .map(|token| self.tagger.tag(token).to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_keep_their_terminators() {
        let structure = PlainTextStructure::new();
        assert_eq!(
            structure.sentences("First one. Second one!  Third?! tail"),
            vec!["First one.", "Second one!", "Third?!", "tail"]
        );
    }

    #[test]
    fn whitespace_and_punctuation_only_text_has_no_sentences() {
        let structure = PlainTextStructure::new();
        assert!(structure.sentences("   \n\t ").is_empty());
        assert!(structure.sentences("...").is_empty());
    }

    #[test]
    fn tags_align_with_tokens() {
        let structure = PlainTextStructure::new();
        let words = structure.words("The server restarts  quickly");
        let tags = structure.pos_tags(&words).unwrap();
        assert_eq!(words.len(), tags.len());
        assert_eq!(tags, vec!["DT", "NN", "NNS", "RB"]);
    }
}
