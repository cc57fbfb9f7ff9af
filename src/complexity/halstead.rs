//! Halstead metrics over a Python syntax tree.
//!
//! Operands are identifiers, literals and whole string nodes. Operators are
//! the remaining anonymous leaf tokens (keywords and symbols), excluding pure
//! delimiters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tree_sitter::Node;

const DELIMITERS: &[&str] = &["(", ")", "[", "]", "{", "}", ",", ":", ".", ";", ""];
const OPERAND_KINDS: &[&str] = &[
    "identifier",
    "integer",
    "float",
    "true",
    "false",
    "none",
    "string",
    "concatenated_string",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HalsteadMetrics {
    pub distinct_operators: usize,
    pub distinct_operands: usize,
    pub total_operators: usize,
    pub total_operands: usize,
    pub vocabulary: usize,
    pub length: usize,
    pub volume: f64,
    pub difficulty: f64,
    pub effort: f64,
}

#[derive(Default)]
struct TokenCounts<'s> {
    operators: HashMap<&'s str, usize>,
    operands: HashMap<&'s str, usize>,
}

pub fn calculate_halstead(root: Node, source: &str) -> HalsteadMetrics {
    let mut counts = TokenCounts::default();
    collect_tokens(root, source.as_bytes(), &mut counts);

    let n1 = counts.operators.len();
    let n2 = counts.operands.len();
    let total_operators: usize = counts.operators.values().sum();
    let total_operands: usize = counts.operands.values().sum();
    let vocabulary = n1 + n2;
    let length = total_operators + total_operands;

    let volume = if vocabulary > 0 {
        length as f64 * (vocabulary as f64).log2()
    } else {
        0.0
    };
    let difficulty = if n2 > 0 {
        (n1 as f64 / 2.0) * (total_operands as f64 / n2 as f64)
    } else {
        0.0
    };

    HalsteadMetrics {
        distinct_operators: n1,
        distinct_operands: n2,
        total_operators,
        total_operands,
        vocabulary,
        length,
        volume,
        difficulty,
        effort: difficulty * volume,
    }
}

fn collect_tokens<'s>(node: Node, source: &'s [u8], counts: &mut TokenCounts<'s>) {
    let kind = node.kind();
    if kind == "comment" {
        return;
    }
    if OPERAND_KINDS.contains(&kind) {
        if let Ok(text) = node.utf8_text(source) {
            *counts.operands.entry(text).or_insert(0) += 1;
        }
        return;
    }
    if node.child_count() == 0 {
        if !node.is_named() && !DELIMITERS.contains(&kind) {
            *counts.operators.entry(kind).or_insert(0) += 1;
        }
        return;
    }
    for child in node.children(&mut node.walk()) {
        collect_tokens(child, source, counts);
    }
}
