use super::{LanguageAnalyzer, QualityReport};
use crate::core::Language;
use crate::errors::Result;
use crate::review::{collect_patterns, RuleSet};

/// Rule-table matches only, for languages without a grammar
pub struct GenericPatternAnalyzer {
    language: Language,
    rules: RuleSet,
}

impl GenericPatternAnalyzer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            rules: RuleSet::builtin(),
        }
    }
}

impl LanguageAnalyzer for GenericPatternAnalyzer {
    fn analyze(&self, code: &str) -> Result<QualityReport> {
        Ok(QualityReport {
            language: self.language,
            deep_analysis: false,
            maintainability_index: None,
            cyclomatic_complexity: Vec::new(),
            halstead: None,
            formatted_code: None,
            code_patterns: collect_patterns(&self.rules, code),
        })
    }

    fn language(&self) -> Language {
        self.language
    }
}
