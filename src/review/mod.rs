//! Pattern-based code review.
//!
//! [`CodeReviewer`] runs two passes over source text. The line scan checks
//! each physical line against the length threshold and the ordered
//! [`RuleSet`]. The complexity pass parses the source as Python and flags
//! functions above the complexity threshold. Source that does not parse
//! still gets the line scan.

pub mod rules;
pub mod style;
pub mod suggestions;

pub use rules::{Rule, RuleCategory, RuleSet};
pub use style::{analyze_style, Formatter, PythonFormatter, StyleAnalysis, StyleIssue};
pub use suggestions::synthesize_suggestions;

use crate::common::{char_len, line_of_offset};
use crate::complexity::{analyze_complexity, parse_python, ComplexityAnalysis};
use crate::config::AnalyzerConfig;
use crate::core::{CommentType, ReviewComment, Severity, SuggestionBundle};
use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const COMPLEXITY_SUGGESTION: &str =
    "Consider breaking down this function into smaller, more manageable pieces";

/// A rule hit anywhere in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub pattern: String,
    pub message: String,
    pub line: usize,
}

/// Rule hits grouped by category, serialized in rule-table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePatterns {
    pub security_risks: Vec<PatternMatch>,
    pub performance_issues: Vec<PatternMatch>,
    pub best_practices: Vec<PatternMatch>,
}

impl CodePatterns {
    pub fn get(&self, category: RuleCategory) -> &[PatternMatch] {
        match category {
            RuleCategory::SecurityRisks => &self.security_risks,
            RuleCategory::PerformanceIssues => &self.performance_issues,
            RuleCategory::BestPractices => &self.best_practices,
        }
    }

    fn get_mut(&mut self, category: RuleCategory) -> &mut Vec<PatternMatch> {
        match category {
            RuleCategory::SecurityRisks => &mut self.security_risks,
            RuleCategory::PerformanceIssues => &mut self.performance_issues,
            RuleCategory::BestPractices => &mut self.best_practices,
        }
    }

    pub fn total(&self) -> usize {
        RuleCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub message: String,
    pub line: usize,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityReview {
    pub security_issues: Vec<SecurityIssue>,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_analysis: Option<ComplexityAnalysis>,
    pub code_patterns: CodePatterns,
    pub style_suggestions: StyleAnalysis,
    pub security_review: SecurityReview,
    pub improvement_suggestions: Vec<SuggestionBundle>,
}

pub struct CodeReviewer {
    config: AnalyzerConfig,
    rules: RuleSet,
    formatter: Arc<dyn Formatter>,
}

impl Default for CodeReviewer {
    fn default() -> Self {
        Self::new(
            AnalyzerConfig::default(),
            RuleSet::builtin(),
            Arc::new(PythonFormatter::new()),
        )
    }
}

impl CodeReviewer {
    pub fn new(config: AnalyzerConfig, rules: RuleSet, formatter: Arc<dyn Formatter>) -> Self {
        Self {
            config,
            rules,
            formatter,
        }
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Line-addressed review comments: the line scan in line order, then
    /// one comment per function above the complexity threshold.
    #[tracing::instrument(skip_all, fields(code_len = code.len()))]
    pub fn generate_review_comments(&self, code: &str) -> Result<Vec<ReviewComment>> {
        self.check_size(code)?;
        let threshold = self.config.line_length_threshold;
        let mut comments = Vec::new();

        for (i, line) in code.split('\n').enumerate() {
            let line_no = i + 1;
            let trimmed = line.trim();

            if char_len(trimmed) > threshold {
                comments.push(ReviewComment {
                    line: line_no,
                    comment_type: CommentType::Style,
                    severity: Severity::Low,
                    message: format!("Line exceeds {threshold} characters"),
                    code: None,
                    suggestion: None,
                });
            }

            for rule in self.rules.matching(line) {
                comments.push(ReviewComment {
                    line: line_no,
                    comment_type: rule.category.into(),
                    severity: rule.severity(),
                    message: rule.message.clone(),
                    code: Some(trimmed.to_string()),
                    suggestion: None,
                });
            }
        }

        if let Some(analysis) = self.complexity_or_skip(code)? {
            comments.extend(
                analysis
                    .complex_functions
                    .into_iter()
                    .filter(|f| f.is_complex)
                    .map(|f| ReviewComment {
                        line: f.line_number,
                        comment_type: CommentType::Complexity,
                        severity: Severity::High,
                        message: format!(
                            "Function {} has high cyclomatic complexity ({})",
                            f.function_name, f.complexity
                        ),
                        code: None,
                        suggestion: Some(COMPLEXITY_SUGGESTION.to_string()),
                    }),
            );
        }

        debug!(comments = comments.len(), "review comments generated");
        Ok(comments)
    }

    /// Whole-source analysis: complexity, rule hits, style, security and
    /// the suggestions derived from them.
    #[tracing::instrument(skip_all, fields(code_len = code.len()))]
    pub fn analyze_code_context(&self, code: &str) -> Result<ContextAnalysis> {
        self.check_size(code)?;

        let complexity_analysis = self.complexity_or_skip(code)?;
        let code_patterns = self.analyze_patterns(code);
        let style_suggestions = analyze_style(
            code,
            self.formatter.as_ref(),
            self.config.line_length_threshold,
        )?;
        let security_review = security_review(&code_patterns);

        let mut analysis = ContextAnalysis {
            complexity_analysis,
            code_patterns,
            style_suggestions,
            security_review,
            improvement_suggestions: Vec::new(),
        };
        analysis.improvement_suggestions = synthesize_suggestions(&analysis);
        Ok(analysis)
    }

    pub fn analyze_patterns(&self, code: &str) -> CodePatterns {
        collect_patterns(&self.rules, code)
    }

    fn check_size(&self, code: &str) -> Result<()> {
        if code.len() > self.config.max_source_bytes {
            return Err(AnalysisError::ResourceLimit(format!(
                "source is {} bytes, limit is {}",
                code.len(),
                self.config.max_source_bytes
            )));
        }
        Ok(())
    }

    fn complexity_or_skip(&self, code: &str) -> Result<Option<ComplexityAnalysis>> {
        match parse_python(code, &self.config) {
            Ok(module) => Ok(Some(analyze_complexity(
                &module,
                self.config.complexity_threshold,
            ))),
            Err(AnalysisError::ParseFailure { line, message }) => {
                debug!(line, %message, "skipping complexity pass");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Every rule match over the whole source, grouped by category
pub fn collect_patterns(rules: &RuleSet, code: &str) -> CodePatterns {
    let mut patterns = CodePatterns::default();
    for category in RuleCategory::ALL {
        let bucket = patterns.get_mut(category);
        for rule in rules.in_category(category) {
            bucket.extend(rule.pattern.find_iter(code).map(|m| PatternMatch {
                pattern: rule.pattern.as_str().to_string(),
                message: rule.message.clone(),
                line: line_of_offset(code, m.start()),
            }));
        }
    }
    patterns
}

fn security_review(patterns: &CodePatterns) -> SecurityReview {
    let security_issues: Vec<SecurityIssue> = patterns
        .security_risks
        .iter()
        .map(|m| SecurityIssue {
            issue_type: "security_risk".to_string(),
            message: m.message.clone(),
            line: m.line,
            severity: Severity::High,
        })
        .collect();
    let risk_level = if security_issues.is_empty() {
        RiskLevel::Low
    } else {
        RiskLevel::High
    };

    SecurityReview {
        security_issues,
        risk_level,
    }
}
