//! Language detection and language-dispatched quality analysis.
//!
//! Python gets grammar-backed deep analysis. Every other language falls back
//! to the rule table and reports `deep_analysis: false`.

pub mod generic;
pub mod python;

pub use generic::GenericPatternAnalyzer;
pub use python::PythonDeepAnalyzer;

use crate::complexity::{HalsteadMetrics, MaintainabilityIndex};
use crate::config::AnalyzerConfig;
use crate::core::Language;
use crate::errors::Result;
use crate::review::CodePatterns;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LANGUAGE_SIGNATURES: Lazy<Vec<(Language, Regex)>> = Lazy::new(|| {
    [
        (
            Language::Python,
            r"def\s+\w+\s*\(|import\s+\w+|from\s+\w+\s+import",
        ),
        (
            Language::JavaScript,
            r"function\s+\w+\s*\(|const\s+\w+\s*=|let\s+\w+\s*=|var\s+\w+\s*=",
        ),
        (
            Language::Java,
            r"public\s+class|private\s+class|protected\s+class",
        ),
        (Language::Cpp, r"#include\s*<|namespace\s+\w+|::\w+"),
        (
            Language::CSharp,
            r"namespace\s+\w+|using\s+\w+;|public\s+class",
        ),
    ]
    .into_iter()
    .map(|(lang, pattern)| (lang, Regex::new(pattern).unwrap()))
    .collect()
});

/// Guess the language of a snippet. The first matching signature wins, so
/// ambiguous snippets resolve toward earlier entries.
pub fn detect_language(code: &str) -> Language {
    LANGUAGE_SIGNATURES
        .iter()
        .find(|(_, signature)| signature.is_match(code))
        .map(|(lang, _)| *lang)
        .unwrap_or(Language::Unknown)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionComplexity {
    pub name: String,
    pub complexity: u32,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub language: Language,
    pub deep_analysis: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainability_index: Option<MaintainabilityIndex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cyclomatic_complexity: Vec<FunctionComplexity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halstead: Option<HalsteadMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_code: Option<String>,
    pub code_patterns: CodePatterns,
}

pub trait LanguageAnalyzer: Send + Sync {
    fn analyze(&self, code: &str) -> Result<QualityReport>;
    fn language(&self) -> Language;
}

pub fn analyzer_for(language: Language, config: &AnalyzerConfig) -> Box<dyn LanguageAnalyzer> {
    match language {
        Language::Python => Box::new(PythonDeepAnalyzer::new(config.clone())),
        other => Box::new(GenericPatternAnalyzer::new(other)),
    }
}

#[tracing::instrument(skip(code, config), fields(code_len = code.len()))]
pub fn analyze_code_quality(
    code: &str,
    language: Language,
    config: &AnalyzerConfig,
) -> Result<QualityReport> {
    analyzer_for(language, config)
        .analyze(code)
        .inspect_err(|e| tracing::warn!(error = %e, "quality analysis failed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_language() {
        assert_eq!(detect_language("import os\n"), Language::Python);
        assert_eq!(detect_language("def main():\n    pass\n"), Language::Python);
        assert_eq!(detect_language("const x = 1;"), Language::JavaScript);
        assert_eq!(detect_language("public class Main {}"), Language::Java);
        assert_eq!(detect_language("#include <stdio.h>"), Language::Cpp);
        assert_eq!(detect_language("using System;"), Language::CSharp);
        assert_eq!(detect_language("just some prose"), Language::Unknown);
    }

    #[test]
    fn test_first_signature_wins() {
        // `namespace Foo` matches both cpp and csharp signatures
        assert_eq!(detect_language("namespace Foo {}"), Language::Cpp);
    }

    #[test]
    fn test_dispatch_by_language() {
        let config = AnalyzerConfig::default();
        assert_eq!(
            analyzer_for(Language::Python, &config).language(),
            Language::Python
        );
        assert_eq!(
            analyzer_for(Language::Java, &config).language(),
            Language::Java
        );
    }
}
