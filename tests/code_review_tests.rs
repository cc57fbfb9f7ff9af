use docwright::review::RiskLevel;
use docwright::{AnalyzerConfig, CodeReviewer, CommentType, Severity};
use indoc::indoc;
use pretty_assertions::assert_eq;

/// A function with `branches` sequential `if` statements
fn branchy_function(branches: usize) -> String {
    let mut source = String::from("def branchy(x):\n");
    for i in 0..branches {
        source.push_str(&format!("    if x == {i}:\n        return {i}\n"));
    }
    source.push_str("    return -1\n");
    source
}

#[cfg(test)]
mod review_comment_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eval_produces_high_security_comment() {
        let comments = CodeReviewer::default()
            .generate_review_comments("value = eval(x)")
            .unwrap();
        assert_eq!(comments.len(), 1);
        let json = serde_json::to_value(&comments[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "line": 1,
                "type": "security_risks",
                "severity": "high",
                "message": "Avoid using eval() as it can execute arbitrary code",
                "code": "value = eval(x)",
            })
        );
    }

    #[test]
    fn test_line_length_boundary() {
        let reviewer = CodeReviewer::default();
        let at_limit = reviewer.generate_review_comments(&"a".repeat(80)).unwrap();
        assert!(at_limit.is_empty());

        let over_limit = reviewer.generate_review_comments(&"a".repeat(81)).unwrap();
        assert_eq!(over_limit.len(), 1);
        assert_eq!(over_limit[0].comment_type, CommentType::Style);
        assert_eq!(over_limit[0].severity, Severity::Low);
    }

    #[test]
    fn test_indentation_does_not_count_toward_line_length() {
        let line = format!("        {}", "a".repeat(80));
        let comments = CodeReviewer::default().generate_review_comments(&line).unwrap();
        assert!(comments.is_empty());
    }

    #[test]
    fn test_complexity_threshold_is_exclusive() {
        let reviewer = CodeReviewer::default();

        let eleven = reviewer
            .generate_review_comments(&branchy_function(10))
            .unwrap();
        assert_eq!(eleven.len(), 1);
        assert_eq!(eleven[0].comment_type, CommentType::Complexity);
        assert_eq!(eleven[0].line, 1);
        assert_eq!(
            eleven[0].message,
            "Function branchy has high cyclomatic complexity (11)"
        );
        assert!(eleven[0].suggestion.is_some());

        let ten = reviewer
            .generate_review_comments(&branchy_function(9))
            .unwrap();
        assert!(ten.is_empty());
    }

    #[test]
    fn test_complexity_comments_follow_line_scan() {
        let mut source = branchy_function(10);
        source.push_str("print(branchy(3))\n");
        let comments = CodeReviewer::default()
            .generate_review_comments(&source)
            .unwrap();
        let kinds: Vec<CommentType> = comments.iter().map(|c| c.comment_type).collect();
        assert_eq!(kinds, vec![CommentType::BestPractices, CommentType::Complexity]);
    }

    #[test]
    fn test_configured_threshold_applies() {
        let config = AnalyzerConfig::default().with_complexity_threshold(2);
        let reviewer = CodeReviewer::with_config(config);
        let comments = reviewer
            .generate_review_comments(&branchy_function(2))
            .unwrap();
        assert_eq!(comments.len(), 1);
    }

    #[test]
    fn test_methods_are_named_with_their_class() {
        let source = format!(
            "class Router:\n{}",
            branchy_function(10)
                .lines()
                .map(|l| format!("    {}\n", l.replace("(x)", "(self, x)")))
                .collect::<String>()
        );
        let comments = CodeReviewer::default()
            .generate_review_comments(&source)
            .unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(
            comments[0].message,
            "Function Router.branchy has high cyclomatic complexity (11)"
        );
        assert_eq!(comments[0].line, 2);
    }

    #[test]
    fn test_nested_function_is_flagged_apart_from_its_parent() {
        let inner: String = branchy_function(10)
            .replace("branchy", "inner")
            .lines()
            .map(|l| format!("    {l}\n"))
            .collect();
        let source = format!("def outer(items):\n{inner}    return inner(items)\n");

        let comments = CodeReviewer::default()
            .generate_review_comments(&source)
            .unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(
            comments[0].message,
            "Function outer.inner has high cyclomatic complexity (11)"
        );
        assert_eq!(comments[0].line, 2);

        let analysis = CodeReviewer::default().analyze_code_context(&source).unwrap();
        let records: Vec<(&str, u32, bool)> = analysis
            .complexity_analysis
            .as_ref()
            .unwrap()
            .complex_functions
            .iter()
            .map(|r| (r.function_name.as_str(), r.complexity, r.is_complex))
            .collect();
        assert_eq!(records, vec![("outer", 1, false), ("outer.inner", 11, true)]);
    }

    #[test]
    fn test_long_boolean_chain_is_reviewed() {
        let terms: Vec<String> = (0..200).map(|i| format!("x == {i}")).collect();
        let source = format!(
            "def matches(x):\n    if {}:\n        return True\n    return False\n",
            terms.join(" or ")
        );
        let comments = CodeReviewer::default()
            .generate_review_comments(&source)
            .unwrap();
        let complexity: Vec<&str> = comments
            .iter()
            .filter(|c| c.comment_type == CommentType::Complexity)
            .map(|c| c.message.as_str())
            .collect();
        assert_eq!(
            complexity,
            vec!["Function matches has high cyclomatic complexity (201)"]
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let reviewer = CodeReviewer::default();
        let source = indoc! {"
            import os

            def run(items):
                for i in range(len(items)):
                    os.system(items[i])
                try:
                    pass
                except:
                    print('failed')
        "};
        let first = reviewer.generate_review_comments(source).unwrap();
        let second = reviewer.generate_review_comments(source).unwrap();
        assert_eq!(first, second);

        let first_context = reviewer.analyze_code_context(source).unwrap();
        let second_context = reviewer.analyze_code_context(source).unwrap();
        assert_eq!(first_context, second_context);
    }
}

#[cfg(test)]
mod context_analysis_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_security_review_for_eval() {
        let analysis = CodeReviewer::default()
            .analyze_code_context("result = eval(x)\n")
            .unwrap();
        assert_eq!(analysis.security_review.risk_level, RiskLevel::High);
        assert_eq!(analysis.security_review.security_issues.len(), 1);
        assert_eq!(analysis.security_review.security_issues[0].line, 1);
        assert_eq!(
            analysis.improvement_suggestions[0].suggestion,
            "Address security risks:"
        );
    }

    #[test]
    fn test_whole_source_patterns_carry_line_numbers() {
        let source = indoc! {"
            def run(items):
                for i in range(len(items)):
                    print(items[i])
                while True:
                    pass
        "};
        let analysis = CodeReviewer::default().analyze_code_context(source).unwrap();
        let perf: Vec<usize> = analysis
            .code_patterns
            .performance_issues
            .iter()
            .map(|m| m.line)
            .collect();
        assert_eq!(perf, vec![2, 4]);
        assert_eq!(analysis.code_patterns.best_practices[0].line, 3);
        assert_eq!(analysis.security_review.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_suggestions_cover_complexity_patterns_and_style() {
        let mut source = branchy_function(10);
        source.push_str("print(branchy(1))   \n");
        let analysis = CodeReviewer::default().analyze_code_context(&source).unwrap();

        let categories: Vec<&str> = analysis
            .improvement_suggestions
            .iter()
            .map(|b| b.category.as_str())
            .collect();
        assert_eq!(categories, vec!["complexity", "best_practices", "style"]);
        assert_eq!(
            analysis.improvement_suggestions[0].details,
            vec!["branchy (complexity: 11)".to_string()]
        );
        assert_eq!(
            analysis.improvement_suggestions[2].details,
            vec!["Formatter would rewrite this line".to_string()]
        );
    }

    #[test]
    fn test_context_json_omits_complexity_on_parse_failure() {
        let analysis = CodeReviewer::default()
            .analyze_code_context("def broken(:\n")
            .unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("complexity_analysis").is_none());
        assert!(json.get("code_patterns").is_some());
        assert!(json.get("error").is_none());
    }
}
