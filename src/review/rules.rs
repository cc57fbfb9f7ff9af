//! Ordered, data-driven pattern rules for the line scanner.
//!
//! Rule order is significant: comments are emitted in table order for each
//! line, and context-analysis categories are reported in declaration order.

use crate::core::{CommentType, Severity};
use crate::errors::{AnalysisError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    SecurityRisks,
    PerformanceIssues,
    BestPractices,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 3] = [
        RuleCategory::SecurityRisks,
        RuleCategory::PerformanceIssues,
        RuleCategory::BestPractices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::SecurityRisks => "security_risks",
            RuleCategory::PerformanceIssues => "performance_issues",
            RuleCategory::BestPractices => "best_practices",
        }
    }

    /// Human form used in suggestion headers, e.g. "security risks"
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn severity(&self) -> Severity {
        match self {
            RuleCategory::BestPractices => Severity::Medium,
            RuleCategory::SecurityRisks | RuleCategory::PerformanceIssues => Severity::High,
        }
    }
}

impl From<RuleCategory> for CommentType {
    fn from(category: RuleCategory) -> Self {
        match category {
            RuleCategory::SecurityRisks => CommentType::SecurityRisks,
            RuleCategory::PerformanceIssues => CommentType::PerformanceIssues,
            RuleCategory::BestPractices => CommentType::BestPractices,
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub category: RuleCategory,
    pub pattern: Regex,
    pub message: String,
}

impl Rule {
    pub fn new(category: RuleCategory, pattern: &str, message: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| AnalysisError::Config(format!("invalid rule pattern {pattern:?}: {e}")))?;
        Ok(Self {
            category,
            pattern,
            message: message.into(),
        })
    }

    pub fn severity(&self) -> Severity {
        self.category.severity()
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

const BUILTIN_RULES: &[(RuleCategory, &str, &str)] = &[
    (
        RuleCategory::SecurityRisks,
        r"eval\(",
        "Avoid using eval() as it can execute arbitrary code",
    ),
    (
        RuleCategory::SecurityRisks,
        r"exec\(",
        "Avoid using exec() as it can execute arbitrary code",
    ),
    (
        RuleCategory::SecurityRisks,
        r"\binput\(",
        "Consider validating input() to prevent security vulnerabilities",
    ),
    (
        RuleCategory::SecurityRisks,
        r"os\.system\(",
        "Use subprocess module instead of os.system for better security",
    ),
    (
        RuleCategory::SecurityRisks,
        r"\bopen\(",
        "Ensure proper file handling and closing with context managers",
    ),
    (
        RuleCategory::PerformanceIssues,
        r"for\s+\w+\s+in\s+range\(len\(",
        "Use enumerate() instead of range(len())",
    ),
    (
        RuleCategory::PerformanceIssues,
        r"\.append\(.*\)\s+for\s+.*\s+in",
        "Consider using list comprehension instead of append in loop",
    ),
    (
        RuleCategory::PerformanceIssues,
        r"while\s+True:",
        "Ensure proper exit condition in while True loops",
    ),
    (
        RuleCategory::BestPractices,
        r"print\(",
        "Consider using logging instead of print statements",
    ),
    (
        RuleCategory::BestPractices,
        r"except:",
        "Specify exception types instead of using bare except",
    ),
    (
        RuleCategory::BestPractices,
        r"pass\s*$",
        "Avoid empty code blocks with pass",
    ),
];

static BUILTIN: Lazy<Vec<Rule>> = Lazy::new(|| {
    BUILTIN_RULES
        .iter()
        .map(|(category, pattern, message)| Rule {
            category: *category,
            pattern: Regex::new(pattern).unwrap(),
            message: (*message).to_string(),
        })
        .collect()
});

/// An ordered rule table
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN.clone(),
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn in_category(&self, category: RuleCategory) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    /// Rules matching a single line, in table order
    pub fn matching<'r>(&'r self, line: &'r str) -> impl Iterator<Item = &'r Rule> + 'r {
        self.rules.iter().filter(move |r| r.is_match(line))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_order() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.len(), 11);
        let categories: Vec<_> = rules.rules().iter().map(|r| r.category).collect();
        assert_eq!(categories[0], RuleCategory::SecurityRisks);
        assert_eq!(categories[5], RuleCategory::PerformanceIssues);
        assert_eq!(categories[10], RuleCategory::BestPractices);
    }

    #[test]
    fn test_severity_by_category() {
        assert_eq!(RuleCategory::SecurityRisks.severity(), Severity::High);
        assert_eq!(RuleCategory::PerformanceIssues.severity(), Severity::High);
        assert_eq!(RuleCategory::BestPractices.severity(), Severity::Medium);
    }

    #[test]
    fn test_input_and_open_need_word_boundary() {
        let rules = RuleSet::builtin();
        let hits = |line: &str| -> Vec<String> {
            rules.matching(line).map(|r| r.message.clone()).collect()
        };
        assert_eq!(hits("name = input()").len(), 1);
        assert!(hits("raw_input(x)").is_empty());
        assert!(hits("reopen(path)").is_empty());
        assert_eq!(hits("with open(path) as f:").len(), 1);
    }

    #[test]
    fn test_pass_only_matches_at_end() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.matching("    pass").count(), 1);
        assert_eq!(rules.matching("    pass  ").count(), 1);
        assert_eq!(rules.matching("passenger = 1").count(), 0);
    }

    #[test]
    fn test_multiple_rules_on_one_line_in_table_order() {
        let rules = RuleSet::builtin();
        let messages: Vec<_> = rules
            .matching("print(eval(x))")
            .map(|r| r.category)
            .collect();
        assert_eq!(
            messages,
            vec![RuleCategory::SecurityRisks, RuleCategory::BestPractices]
        );
    }

    #[test]
    fn test_custom_rule_rejects_bad_regex() {
        let err = Rule::new(RuleCategory::BestPractices, "(", "broken").unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(RuleCategory::PerformanceIssues.label(), "performance issues");
        assert_eq!(
            CommentType::from(RuleCategory::SecurityRisks),
            CommentType::SecurityRisks
        );
    }
}
