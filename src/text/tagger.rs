//! Rule-based part-of-speech tagger.
//!
//! Closed-class word lists first, then numerals, capitalisation and suffix
//! rules. Emits a subset of the Penn Treebank tag set.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static CLOSED_CLASS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let groups: &[(&str, &[&str])] = &[
        (
            "DT",
            &[
                "a", "an", "the", "this", "that", "these", "those", "each", "every", "some",
                "any", "all", "both", "either", "neither", "no", "another",
            ],
        ),
        (
            "PRP",
            &[
                "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
                "itself", "themselves", "yourself",
            ],
        ),
        ("PRP$", &["my", "your", "his", "its", "our", "their"]),
        (
            "IN",
            &[
                "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "about",
                "over", "under", "between", "through", "during", "before", "after", "without",
                "within", "via", "per", "as", "if", "because", "while", "than", "since",
                "until", "upon", "across", "against", "among", "whether",
            ],
        ),
        ("CC", &["and", "or", "but", "nor", "yet", "so"]),
        (
            "MD",
            &[
                "can", "could", "may", "might", "must", "shall", "should", "will", "would",
            ],
        ),
        ("TO", &["to"]),
        ("WDT", &["which", "what", "whatever"]),
        ("WP", &["who", "whom", "whose"]),
        ("WRB", &["when", "where", "why", "how"]),
        (
            "RB",
            &[
                "not", "never", "then", "also", "very", "too", "just", "only", "now", "here",
                "there", "always", "often", "again", "still", "already", "soon", "instead",
            ],
        ),
        (
            "VB",
            &[
                "be", "have", "do", "use", "make", "run", "call", "see", "get", "set", "add",
                "create", "return", "need", "ensure", "avoid",
            ],
        ),
        (
            "VBZ",
            &[
                "is", "has", "does", "uses", "makes", "runs", "calls", "returns", "needs",
                "provides", "supports", "contains", "requires", "allows", "means", "gets",
                "sets", "handles", "creates", "sends", "reads", "writes",
            ],
        ),
        ("VBP", &["are", "am"]),
        ("VBD", &["was", "were", "had", "did", "made", "ran", "got", "sent", "wrote"]),
        ("VBN", &["been", "done", "known", "given", "taken", "written"]),
        (
            "JJ",
            &[
                "new", "good", "bad", "great", "simple", "easy", "hard", "fast", "slow",
                "large", "small", "big", "high", "low", "old", "same", "other", "different",
                "important", "main", "full", "best", "better", "worse", "poor", "clear",
                "secure", "safe", "robust", "efficient",
            ],
        ),
    ];

    let mut map = HashMap::new();
    for (tag, words) in groups {
        for word in *words {
            map.entry(*word).or_insert(*tag);
        }
    }
    map
});

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ic"];

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedTagger;

impl RuleBasedTagger {
    pub fn new() -> Self {
        Lazy::force(&CLOSED_CLASS);
        Self
    }

    pub fn tag(&self, token: &str) -> &'static str {
        let core = token.trim_matches(|c: char| !c.is_alphanumeric());
        if core.is_empty() {
            return "SYM";
        }

        let lower = core.to_lowercase();
        if let Some(tag) = CLOSED_CLASS.get(lower.as_str()) {
            return tag;
        }
        if core
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return "CD";
        }
        if lower.ends_with("n't") {
            return "RB";
        }
        if core.chars().next().is_some_and(char::is_uppercase) {
            return "NNP";
        }
        suffix_tag(&lower)
    }
}

fn suffix_tag(lower: &str) -> &'static str {
    if lower.len() > 4 && lower.ends_with("ly") {
        return "RB";
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return "VBG";
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return "VBD";
    }
    if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "JJ";
    }
    if lower.len() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
    {
        return "NNS";
    }
    "NN"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_class_words_are_case_insensitive() {
        let tagger = RuleBasedTagger::new();
        assert_eq!(tagger.tag("The"), "DT");
        assert_eq!(tagger.tag("and"), "CC");
        assert_eq!(tagger.tag("uses"), "VBZ");
    }

    #[test]
    fn capitalised_tokens_are_proper_nouns() {
        let tagger = RuleBasedTagger::new();
        assert_eq!(tagger.tag("Client"), "NNP");
        assert_eq!(tagger.tag("CLIENT"), "NNP");
        assert_eq!(tagger.tag("Kubernetes,"), "NNP");
    }

    #[test]
    fn suffix_rules_apply_to_lowercase_words() {
        let tagger = RuleBasedTagger::new();
        assert_eq!(tagger.tag("quickly"), "RB");
        assert_eq!(tagger.tag("caching."), "VBG");
        assert_eq!(tagger.tag("deployed"), "VBD");
        assert_eq!(tagger.tag("servers"), "NNS");
        assert_eq!(tagger.tag("class"), "NN");
        assert_eq!(tagger.tag("client-side"), "NN");
    }

    #[test]
    fn numbers_and_punctuation() {
        let tagger = RuleBasedTagger::new();
        assert_eq!(tagger.tag("3.14"), "CD");
        assert_eq!(tagger.tag("--"), "SYM");
    }
}
