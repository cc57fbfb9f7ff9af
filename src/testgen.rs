//! Pytest scaffolding for the functions in a Python module.
//!
//! Every function gets three cases: a basic call with argument values guessed
//! from parameter names, an edge case passing `None` everywhere, and an error
//! case expecting `TypeError` and `ValueError`. Only positional parameters
//! take part, and `self` is never passed.

use crate::complexity::{parse_python, PythonFunction};
use crate::config::AnalyzerConfig;
use crate::core::Language;
use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Basic,
    Edge,
    Error,
}

impl TestKind {
    fn suffix(self) -> &'static str {
        match self {
            TestKind::Basic => "basic",
            TestKind::Edge => "edge_cases",
            TestKind::Error => "error_cases",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub function: String,
    #[serde(rename = "type")]
    pub kind: TestKind,
    pub test_template: String,
}

/// Argument-name fragments and the literal used when one appears in a
/// lowercased parameter name. First match wins.
static MOCK_VALUES: &[(&str, &str)] = &[
    ("name", "\"test_name\""),
    ("id", "1"),
    ("count", "0"),
    ("data", "{\"test\": \"data\"}"),
    ("list", "[]"),
    ("dict", "{}"),
    ("flag", "False"),
    ("enabled", "True"),
    ("date", "\"2024-01-14\""),
    ("path", "\"test/path\""),
    ("url", "\"http://example.com\""),
    ("email", "\"test@example.com\""),
    ("config", "{\"test\": \"config\"}"),
    ("options", "{\"test\": \"options\"}"),
];

pub fn mock_value(arg: &str) -> &'static str {
    let lowered = arg.to_lowercase();
    MOCK_VALUES
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map_or("None", |(_, value)| *value)
}

/// Basic, edge and error cases for each function definition, in document
/// order. Methods and nested functions are included under their bare name.
#[tracing::instrument(skip(code, config), fields(code_len = code.len()))]
pub fn generate_test_cases(
    code: &str,
    language: Language,
    config: &AnalyzerConfig,
) -> Result<Vec<TestCase>> {
    if !language.has_deep_support() {
        return Err(AnalysisError::unsupported(language.as_str(), "test generation"));
    }

    let module = parse_python(code, config)?;
    let cases: Vec<TestCase> = module
        .functions()
        .iter()
        .flat_map(|f| {
            [TestKind::Basic, TestKind::Edge, TestKind::Error]
                .into_iter()
                .map(move |kind| test_case(f, kind))
        })
        .collect();
    tracing::debug!(cases = cases.len(), "generated test cases");
    Ok(cases)
}

fn test_case(function: &PythonFunction, kind: TestKind) -> TestCase {
    let args: Vec<&str> = function
        .parameters
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "self")
        .collect();
    TestCase {
        name: format!("test_{}_{}", function.name, kind.suffix()),
        function: function.name.clone(),
        kind,
        test_template: render_template(&function.name, &args, kind),
    }
}

pub fn render_template(function: &str, args: &[&str], kind: TestKind) -> String {
    let header = format!("def test_{function}_{}():", kind.suffix());
    let lines: Vec<String> = match kind {
        TestKind::Basic => {
            let values: Vec<&str> = args.iter().map(|arg| mock_value(arg)).collect();
            [header, "    # Setup".to_string()]
                .into_iter()
                .chain(args.iter().zip(&values).map(|(a, v)| format!("    {a} = {v}")))
                .chain([
                    String::new(),
                    "    # Execute".to_string(),
                    format!("    result = {function}({})", values.join(", ")),
                    String::new(),
                    "    # Assert".to_string(),
                    ASSERT_NOT_NONE.to_string(),
                    String::new(),
                ])
                .collect()
        }
        TestKind::Edge => [header, "    # Test with empty/None values".to_string()]
            .into_iter()
            .chain(args.iter().map(|a| format!("    {a} = None")))
            .chain([
                String::new(),
                "    # Execute and verify it handles edge cases gracefully".to_string(),
                format!("    result = {function}({})", args.join(", ")),
                String::new(),
                "    # Assert handles None/empty values".to_string(),
                ASSERT_NOT_NONE.to_string(),
                String::new(),
            ])
            .collect(),
        TestKind::Error => vec![
            header,
            "    # Test with invalid types".to_string(),
            "    with pytest.raises(TypeError):".to_string(),
            format!("        {function}({})", repeat_arg("invalid_value", args.len())),
            String::new(),
            "    # Test with invalid values".to_string(),
            "    with pytest.raises(ValueError):".to_string(),
            format!("        {function}({})", repeat_arg("-1", args.len())),
            String::new(),
        ],
    };
    lines.join("\n")
}

const ASSERT_NOT_NONE: &str = "    assert result is not None  # Replace with specific assertions";

fn repeat_arg(value: &str, count: usize) -> String {
    vec![value; count].join(", ")
}
