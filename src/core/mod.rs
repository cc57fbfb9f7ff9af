//! Core record types shared by the code review analyzers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    CSharp,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Unknown => "unknown",
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[
            (&["py", "pyw"], Language::Python),
            (&["js", "jsx", "ts", "tsx"], Language::JavaScript),
            (&["java"], Language::Java),
            (&["cpp", "hpp", "h"], Language::Cpp),
            (&["cs"], Language::CSharp),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    /// Whether a grammar-backed analyzer exists for this language
    pub fn has_deep_support(&self) -> bool {
        matches!(self, Language::Python)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" | "typescript" | "ts" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "unknown" => Ok(Language::Unknown),
            other => Err(format!("unrecognized language: {other}")),
        }
    }
}

/// Severity levels for review comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// What kind of finding a review comment reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentType {
    Style,
    SecurityRisks,
    PerformanceIssues,
    BestPractices,
    Complexity,
}

impl CommentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentType::Style => "style",
            CommentType::SecurityRisks => "security_risks",
            CommentType::PerformanceIssues => "performance_issues",
            CommentType::BestPractices => "best_practices",
            CommentType::Complexity => "complexity",
        }
    }
}

impl std::fmt::Display for CommentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line-addressed review finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub line: usize,
    #[serde(rename = "type")]
    pub comment_type: CommentType,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Cyclomatic complexity of one function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityRecord {
    pub function_name: String,
    pub complexity: u32,
    pub line_number: usize,
    pub is_complex: bool,
}

impl ComplexityRecord {
    pub fn new(function_name: String, complexity: u32, line_number: usize, threshold: u32) -> Self {
        Self {
            function_name,
            complexity,
            line_number,
            is_complex: complexity > threshold,
        }
    }
}

/// A categorized group of improvement suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionBundle {
    pub category: String,
    pub suggestion: String,
    pub details: Vec<String>,
}
