use docwright::analyzers::detect_language;
use docwright::{analyze_code_quality, generate_test_cases, AnalysisError, AnalyzerConfig, Language};
use indoc::indoc;

const SAMPLE: &str = indoc! {r#"
    import json

    def load(path, strict=False):
        """Read a JSON document."""
        with open(path) as handle:
            data = json.load(handle)
        if strict and not data:
            raise ValueError("empty")
        return data
"#};

#[test]
fn test_python_source_gets_deep_analysis() {
    let language = detect_language(SAMPLE);
    assert_eq!(language, Language::Python);

    let report = analyze_code_quality(SAMPLE, language, &AnalyzerConfig::default()).unwrap();
    assert!(report.deep_analysis);
    assert_eq!(report.cyclomatic_complexity[0].name, "load");
    assert_eq!(report.cyclomatic_complexity[0].complexity, 3);
    assert_eq!(report.code_patterns.security_risks.len(), 1);

    let halstead = report.halstead.unwrap();
    assert!(halstead.volume > 0.0);
    let mi = report.maintainability_index.unwrap();
    assert!(mi.score > 0.0 && mi.score < 100.0);
}

#[test]
fn test_other_languages_get_pattern_heuristics() {
    let code = "function run() { eval(input); }";
    let report =
        analyze_code_quality(code, Language::JavaScript, &AnalyzerConfig::default()).unwrap();
    assert!(!report.deep_analysis);
    assert!(report.halstead.is_none());
    assert_eq!(report.code_patterns.security_risks.len(), 1);
}

#[test]
fn test_invalid_python_fails_quality_analysis() {
    let err = analyze_code_quality("def (", Language::Python, &AnalyzerConfig::default())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::ParseFailure { line: 1, .. }));
}

#[test]
fn test_generated_test_cases_for_sample() {
    let cases = generate_test_cases(SAMPLE, Language::Python, &AnalyzerConfig::default()).unwrap();
    let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["test_load_basic", "test_load_edge_cases", "test_load_error_cases"]
    );
    assert!(cases[0].test_template.contains("    path = \"test/path\"\n"));
    assert!(cases[0].test_template.contains("    strict = None\n"));
    assert!(cases[0]
        .test_template
        .contains("result = load(\"test/path\", None)"));
    assert!(cases[1].test_template.contains("result = load(path, strict)"));
    assert!(cases[2]
        .test_template
        .contains("        load(invalid_value, invalid_value)\n"));

    let json = serde_json::to_value(&cases[2]).unwrap();
    assert_eq!(json["type"], "error");
    assert_eq!(json["function"], "load");
}
