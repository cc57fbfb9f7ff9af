//! Improvement suggestions derived from a finished context analysis.

use super::rules::RuleCategory;
use super::ContextAnalysis;
use crate::core::SuggestionBundle;

/// Bundles in fixed order: complexity, pattern categories, then style.
/// Sources with nothing to report produce no bundle.
pub fn synthesize_suggestions(analysis: &ContextAnalysis) -> Vec<SuggestionBundle> {
    let mut bundles = Vec::new();

    if let Some(complexity) = &analysis.complexity_analysis {
        let details: Vec<String> = complexity
            .complex_functions
            .iter()
            .filter(|f| f.is_complex)
            .map(|f| format!("{} (complexity: {})", f.function_name, f.complexity))
            .collect();
        if !details.is_empty() {
            bundles.push(SuggestionBundle {
                category: "complexity".to_string(),
                suggestion: "Consider refactoring these complex functions:".to_string(),
                details,
            });
        }
    }

    for category in RuleCategory::ALL {
        let matches = analysis.code_patterns.get(category);
        if matches.is_empty() {
            continue;
        }
        bundles.push(SuggestionBundle {
            category: category.as_str().to_string(),
            suggestion: format!("Address {}:", category.label()),
            details: matches
                .iter()
                .map(|m| format!("Line {}: {}", m.line, m.message))
                .collect(),
        });
    }

    let style = &analysis.style_suggestions;
    if style.needs_formatting {
        bundles.push(SuggestionBundle {
            category: "style".to_string(),
            suggestion: "Code style improvements needed:".to_string(),
            details: style.style_issues.iter().map(|i| i.message.clone()).collect(),
        });
    }

    bundles
}
