//! Layout checks and the source formatter capability.

use crate::common::char_len;
use crate::core::Severity;
use crate::errors::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

const FORMATTER_MESSAGE: &str = "Formatter would rewrite this line";
const INDENT_MESSAGE: &str = "Indentation should be a multiple of 4 spaces";

/// Rewrites source into canonical layout
pub trait Formatter: Send + Sync {
    fn format(&self, source: &str) -> Result<String>;
}

/// Conservative Python layout normaliser.
///
/// Leading tabs become four spaces, trailing whitespace is stripped, runs of
/// blank lines are capped at two and the file ends with exactly one newline.
/// Tokens inside a line are never touched.
#[derive(Debug, Clone, Default)]
pub struct PythonFormatter;

impl PythonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for PythonFormatter {
    fn format(&self, source: &str) -> Result<String> {
        let mut out = String::with_capacity(source.len());
        let mut blank_run = 0;

        for line in source.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 2 || out.is_empty() {
                    continue;
                }
                out.push('\n');
                continue;
            }
            blank_run = 0;
            let indent_len = line.len() - line.trim_start().len();
            let (indent, rest) = line.split_at(indent_len);
            out.push_str(&indent.replace('\t', "    "));
            out.push_str(rest);
            out.push('\n');
        }

        while out.ends_with("\n\n") {
            out.pop();
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleIssue {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

impl StyleIssue {
    fn low(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAnalysis {
    pub needs_formatting: bool,
    pub style_issues: Vec<StyleIssue>,
}

pub fn analyze_style(
    code: &str,
    formatter: &dyn Formatter,
    line_length_threshold: usize,
) -> Result<StyleAnalysis> {
    let formatted = formatter.format(code)?;

    let mut style_issues = line_length_issues(code, line_length_threshold);
    style_issues.extend(indentation_issues(code));
    style_issues.extend(formatter_issues(code, &formatted));

    Ok(StyleAnalysis {
        needs_formatting: formatted != code,
        style_issues,
    })
}

/// Lines whose trimmed length exceeds the threshold; reports the raw length
pub fn line_length_issues(code: &str, threshold: usize) -> Vec<StyleIssue> {
    code.split('\n')
        .enumerate()
        .filter(|(_, line)| char_len(line.trim()) > threshold)
        .map(|(i, line)| {
            StyleIssue::low(
                i + 1,
                format!("Line too long ({} > {threshold} characters)", char_len(line)),
            )
        })
        .collect()
}

pub fn indentation_issues(code: &str) -> Vec<StyleIssue> {
    code.split('\n')
        .enumerate()
        .filter_map(|(i, line)| {
            let indent = LEADING_WHITESPACE.find(line)?;
            (char_len(indent.as_str()) % 4 != 0).then(|| StyleIssue::low(i + 1, INDENT_MESSAGE))
        })
        .collect()
}

/// One issue per original line the formatter removes or rewrites
pub fn formatter_issues(original: &str, formatted: &str) -> Vec<StyleIssue> {
    let diff = TextDiff::from_lines(original, formatted);
    let mut lines: Vec<usize> = diff
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Delete)
        .filter_map(|change| change.old_index())
        .map(|idx| idx + 1)
        .collect();
    lines.dedup();

    lines
        .into_iter()
        .map(|line| StyleIssue::low(line, FORMATTER_MESSAGE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;
    use pretty_assertions::assert_eq;

    struct BrokenFormatter;

    impl Formatter for BrokenFormatter {
        fn format(&self, _source: &str) -> Result<String> {
            Err(AnalysisError::capability("formatter", "not installed"))
        }
    }

    #[test]
    fn test_formatter_normalises_layout() {
        let source = "def f():\n\treturn 1   \n\n\n\n\nx = 2";
        let formatted = PythonFormatter::new().format(source).unwrap();
        assert_eq!(formatted, "def f():\n    return 1\n\n\nx = 2\n");
    }

    #[test]
    fn test_formatter_is_idempotent() {
        let formatter = PythonFormatter::new();
        let once = formatter.format("\n\nif x:\n\ty = 1  \n\n\n\n").unwrap();
        let twice = formatter.format(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, "if x:\n    y = 1\n");
    }

    #[test]
    fn test_clean_source_needs_no_formatting() {
        let analysis = analyze_style("x = 1\n", &PythonFormatter::new(), 80).unwrap();
        assert!(!analysis.needs_formatting);
        assert!(analysis.style_issues.is_empty());
    }

    #[test]
    fn test_line_length_reports_untrimmed_length() {
        let line = format!("    {}", "a".repeat(81));
        let issues = line_length_issues(&line, 80);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Line too long (85 > 80 characters)");
    }

    #[test]
    fn test_line_length_boundary() {
        assert!(line_length_issues(&"a".repeat(80), 80).is_empty());
        assert_eq!(line_length_issues(&"a".repeat(81), 80).len(), 1);
    }

    #[test]
    fn test_indentation_multiple_of_four() {
        let issues = indentation_issues("if x:\n   y = 1\n    z = 2\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
        assert_eq!(issues[0].message, INDENT_MESSAGE);
    }

    #[test]
    fn test_issue_order_is_length_indent_then_formatter() {
        let code = format!("{}\n  y = 1   \n", "b".repeat(90));
        let analysis = analyze_style(&code, &PythonFormatter::new(), 80).unwrap();
        assert!(analysis.needs_formatting);
        let messages: Vec<&str> = analysis
            .style_issues
            .iter()
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Line too long (90 > 80 characters)",
                INDENT_MESSAGE,
                FORMATTER_MESSAGE,
            ]
        );
        assert_eq!(analysis.style_issues[2].line, 2);
    }

    #[test]
    fn test_formatter_failure_propagates() {
        let err = analyze_style("x = 1\n", &BrokenFormatter, 80).unwrap_err();
        assert!(matches!(err, AnalysisError::CapabilityUnavailable { .. }));
    }
}
