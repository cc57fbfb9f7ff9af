//! Complexity metrics for Python source.
//!
//! [`analyze_complexity`] produces the per-function records used by the code
//! reviewer; [`python`] holds the tree-sitter plumbing and McCabe counting.

pub mod halstead;
pub mod maintainability;
pub mod python;

pub use halstead::{calculate_halstead, HalsteadMetrics};
pub use maintainability::{compute_maintainability_index, MaintainabilityIndex};
pub use python::{parse_python, PythonFunction, PythonModule};

use crate::core::ComplexityRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAnalysis {
    pub overall_complexity: u32,
    pub average_complexity: f64,
    pub complex_functions: Vec<ComplexityRecord>,
}

/// Per-function complexity records with module totals
pub fn analyze_complexity(module: &PythonModule, threshold: u32) -> ComplexityAnalysis {
    let complex_functions: Vec<ComplexityRecord> = module
        .functions()
        .into_iter()
        .map(|f| ComplexityRecord::new(f.qualified_name, f.complexity, f.line, threshold))
        .collect();

    summarize(complex_functions)
}

pub fn summarize(records: Vec<ComplexityRecord>) -> ComplexityAnalysis {
    let overall_complexity: u32 = records.iter().map(|r| r.complexity).sum();
    let average_complexity = if records.is_empty() {
        0.0
    } else {
        f64::from(overall_complexity) / records.len() as f64
    };

    ComplexityAnalysis {
        overall_complexity,
        average_complexity,
        complex_functions: records,
    }
}
