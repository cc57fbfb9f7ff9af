//! Python syntax trees via tree-sitter and per-function McCabe complexity.
//!
//! A function's complexity is 1 plus its decision points. Bodies of nested
//! functions and classes are excluded from the enclosing function; nested
//! definitions get their own dotted name (`Outer.inner`, `Class.method`).

use crate::config::AnalyzerConfig;
use crate::errors::{AnalysisError, Result};
use tree_sitter::{Node, Parser, Tree};

/// A function definition found in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonFunction {
    pub name: String,
    pub qualified_name: String,
    pub line: usize,
    pub complexity: u32,
    pub parameters: Vec<String>,
    pub docstring: Option<String>,
}

/// Parsed Python source and its syntax tree
pub struct PythonModule<'a> {
    pub source: &'a str,
    pub tree: Tree,
}

impl<'a> PythonModule<'a> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn functions(&self) -> Vec<PythonFunction> {
        let mut functions = Vec::new();
        let mut scope = Vec::new();
        collect_functions(self.root(), self.source.as_bytes(), &mut scope, &mut functions);
        functions
    }
}

/// Parse `source` as Python, enforcing the configured size and nesting guards.
pub fn parse_python<'a>(source: &'a str, config: &AnalyzerConfig) -> Result<PythonModule<'a>> {
    if source.len() > config.max_source_bytes {
        return Err(AnalysisError::ResourceLimit(format!(
            "source is {} bytes, limit is {}",
            source.len(),
            config.max_source_bytes
        )));
    }

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| AnalysisError::capability("python_grammar", e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AnalysisError::parse(1, "parser produced no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        let line = first_error_line(root).unwrap_or(1);
        return Err(AnalysisError::parse(line, "invalid Python syntax"));
    }

    let depth = max_depth(root);
    if depth > config.max_nesting_depth {
        return Err(AnalysisError::ResourceLimit(format!(
            "syntax tree depth {} exceeds limit {}",
            depth, config.max_nesting_depth
        )));
    }

    Ok(PythonModule { source, tree })
}

fn first_error_line(root: Node) -> Option<usize> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node.start_position().row + 1);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Depth of the deepest node, computed without recursion.
pub fn max_depth(root: Node) -> usize {
    let mut cursor = root.walk();
    let mut depth = 0;
    let mut max = 0;
    loop {
        if cursor.goto_first_child() {
            depth += 1;
            max = max.max(depth);
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return max;
            }
            depth -= 1;
        }
    }
}

fn collect_functions(
    node: Node,
    source: &[u8],
    scope: &mut Vec<String>,
    functions: &mut Vec<PythonFunction>,
) {
    match node.kind() {
        "function_definition" => {
            let name = field_text(node, "name", source).unwrap_or_else(|| "<anonymous>".into());
            scope.push(name.clone());
            functions.push(PythonFunction {
                qualified_name: scope.join("."),
                name,
                line: node.start_position().row + 1,
                complexity: calculate_cyclomatic_complexity(node),
                parameters: extract_parameters(node, source),
                docstring: extract_docstring(node, source),
            });
            visit_children(node, source, scope, functions);
            scope.pop();
        }
        "class_definition" => {
            let name = field_text(node, "name", source).unwrap_or_else(|| "<anonymous>".into());
            scope.push(name);
            visit_children(node, source, scope, functions);
            scope.pop();
        }
        _ => visit_children(node, source, scope, functions),
    }
}

fn visit_children(
    node: Node,
    source: &[u8],
    scope: &mut Vec<String>,
    functions: &mut Vec<PythonFunction>,
) {
    for child in node.children(&mut node.walk()) {
        collect_functions(child, source, scope, functions);
    }
}

/// McCabe complexity of a `function_definition` node.
pub fn calculate_cyclomatic_complexity(function: Node) -> u32 {
    1 + function
        .child_by_field_name("body")
        .map_or(0, count_decision_points)
}

/// Decision points in an arbitrary subtree, nested definitions excluded.
pub fn count_decision_points(node: Node) -> u32 {
    let mut count = 0;
    visit_node_for_complexity(node, &mut count);
    count
}

fn visit_node_for_complexity(node: Node, complexity: &mut u32) {
    match node.kind() {
        "function_definition" | "class_definition" => return,
        "if_statement" | "elif_clause" | "conditional_expression" => *complexity += 1,
        "for_statement" | "while_statement" => {
            *complexity += 1;
            if has_child_kind(node, "else_clause") {
                *complexity += 1;
            }
        }
        "try_statement" => {
            if has_child_kind(node, "else_clause") {
                *complexity += 1;
            }
        }
        "except_clause" | "except_group_clause" => *complexity += 1,
        "assert_statement" => *complexity += 1,
        // Each `and`/`or` short-circuits
        "boolean_operator" => *complexity += 1,
        "for_in_clause" | "if_clause" => *complexity += 1,
        "case_clause" => *complexity += 1,
        _ => {}
    }

    for child in node.children(&mut node.walk()) {
        visit_node_for_complexity(child, complexity);
    }
}

fn has_child_kind(node: Node, kind: &str) -> bool {
    node.children(&mut node.walk()).any(|c| c.kind() == kind)
}

fn field_text(node: Node, field: &str, source: &[u8]) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|n| n.utf8_text(source).ok())
        .map(str::to_string)
}

const POSITIONAL_END_KINDS: &[&str] = &[
    "list_splat_pattern",
    "keyword_separator",
    "dictionary_splat_pattern",
];

fn extract_parameters(function: Node, source: &[u8]) -> Vec<String> {
    let Some(params) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };

    // Only positional parameters; everything from the first `*`, `*args`
    // or `**kwargs` on is keyword-only or variadic.
    params
        .named_children(&mut params.walk())
        .take_while(|param| {
            // `*args: int` is a typed_parameter wrapping the splat
            let kind = match param.kind() {
                "typed_parameter" => param.named_child(0).map_or("", |n| n.kind()),
                other => other,
            };
            !POSITIONAL_END_KINDS.contains(&kind)
        })
        .filter_map(|param| {
            let ident = match param.kind() {
                "identifier" => Some(param),
                "typed_parameter" => param
                    .named_child(0)
                    .filter(|n| n.kind() == "identifier"),
                "default_parameter" | "typed_default_parameter" => {
                    param.child_by_field_name("name")
                }
                _ => None,
            }?;
            ident.utf8_text(source).ok().map(str::to_string)
        })
        .collect()
}

fn extract_docstring(function: Node, source: &[u8]) -> Option<String> {
    let body = function.child_by_field_name("body")?;
    let first = body.named_child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let string = first.named_child(0).filter(|n| n.kind() == "string")?;
    let raw = string.utf8_text(source).ok()?;
    Some(clean_docstring(strip_string_delimiters(raw)))
}

fn strip_string_delimiters(raw: &str) -> &str {
    let unprefixed = raw.trim_start_matches(|c: char| "rRbBuUfF".contains(c));
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if let Some(inner) = unprefixed
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    unprefixed
}

/// Trim the first line, dedent the rest, drop surrounding blank lines.
fn clean_docstring(doc: &str) -> String {
    let mut lines = doc.lines();
    let first = lines.next().unwrap_or("").trim().to_string();
    let rest: Vec<&str> = lines.collect();
    let indent = rest
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<String> = std::iter::once(first)
        .chain(rest.iter().map(|l| {
            l.get(indent..)
                .map(str::trim_end)
                .unwrap_or_else(|| l.trim())
                .to_string()
        }))
        .collect();

    while cleaned.last().is_some_and(|l| l.is_empty()) {
        cleaned.pop();
    }
    while cleaned.first().is_some_and(|l| l.is_empty()) {
        cleaned.remove(0);
    }
    cleaned.join("\n")
}
