use super::{FunctionComplexity, LanguageAnalyzer, QualityReport};
use crate::complexity::maintainability::count_sloc;
use crate::complexity::{calculate_halstead, compute_maintainability_index, parse_python};
use crate::config::AnalyzerConfig;
use crate::core::Language;
use crate::errors::Result;
use crate::review::{collect_patterns, Formatter, PythonFormatter, RuleSet};
use std::sync::Arc;

pub struct PythonDeepAnalyzer {
    config: AnalyzerConfig,
    rules: RuleSet,
    formatter: Arc<dyn Formatter>,
}

impl PythonDeepAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            rules: RuleSet::builtin(),
            formatter: Arc::new(PythonFormatter::new()),
        }
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }
}

impl LanguageAnalyzer for PythonDeepAnalyzer {
    fn analyze(&self, code: &str) -> Result<QualityReport> {
        let module = parse_python(code, &self.config)?;
        let functions = module.functions();

        let halstead = calculate_halstead(module.root(), code);
        let total_complexity: u32 = functions.iter().map(|f| f.complexity).sum();
        let maintainability =
            compute_maintainability_index(halstead.volume, total_complexity, count_sloc(code));

        let cyclomatic_complexity = functions
            .into_iter()
            .map(|f| FunctionComplexity {
                name: f.qualified_name,
                complexity: f.complexity,
                line: f.line,
            })
            .collect();

        Ok(QualityReport {
            language: Language::Python,
            deep_analysis: true,
            maintainability_index: Some(maintainability),
            cyclomatic_complexity,
            halstead: Some(halstead),
            formatted_code: Some(self.formatter.format(code)?),
            code_patterns: collect_patterns(&self.rules, code),
        })
    }

    fn language(&self) -> Language {
        Language::Python
    }
}
