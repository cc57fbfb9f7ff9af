//! Analyzer configuration.
//!
//! Thresholds are read-only once an analyzer is constructed. Values come from
//! defaults, an optional `.docwright.toml`, and CLI overrides, in that order.

use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".docwright.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Functions above this cyclomatic complexity are reported
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: u32,

    /// Trimmed lines longer than this (in characters) are reported
    #[serde(default = "default_line_length_threshold")]
    pub line_length_threshold: usize,

    /// Sources larger than this are rejected before parsing
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,

    /// Syntax trees nested deeper than this are rejected
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,

    #[serde(default)]
    pub similarity: SimilarityConfig,
}

/// Sampling limits for the external similarity check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    #[serde(default = "default_sample_sentences")]
    pub sample_sentences: usize,

    /// A sentence needs strictly more words than this to be probed
    #[serde(default = "default_min_words")]
    pub min_words: usize,

    #[serde(default = "default_max_sources")]
    pub max_sources: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            line_length_threshold: default_line_length_threshold(),
            max_source_bytes: default_max_source_bytes(),
            max_nesting_depth: default_max_nesting_depth(),
            similarity: SimilarityConfig::default(),
        }
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            sample_sentences: default_sample_sentences(),
            min_words: default_min_words(),
            max_sources: default_max_sources(),
        }
    }
}

fn default_complexity_threshold() -> u32 {
    10
}
fn default_line_length_threshold() -> usize {
    80
}
fn default_max_source_bytes() -> usize {
    1024 * 1024
}
fn default_max_nesting_depth() -> usize {
    1000
}
fn default_sample_sentences() -> usize {
    5
}
fn default_min_words() -> usize {
    10
}
fn default_max_sources() -> usize {
    3
}

impl AnalyzerConfig {
    pub fn with_complexity_threshold(mut self, threshold: u32) -> Self {
        self.complexity_threshold = threshold;
        self
    }

    pub fn with_line_length_threshold(mut self, threshold: usize) -> Self {
        self.line_length_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.complexity_threshold == 0 {
            return Err(AnalysisError::Config(
                "complexity_threshold must be at least 1".into(),
            ));
        }
        if self.line_length_threshold == 0 {
            return Err(AnalysisError::Config(
                "line_length_threshold must be at least 1".into(),
            ));
        }
        if self.max_source_bytes == 0 || self.max_nesting_depth == 0 {
            return Err(AnalysisError::Config(
                "resource limits must be non-zero".into(),
            ));
        }
        if self.similarity.max_sources == 0 {
            return Err(AnalysisError::Config(
                "similarity.max_sources must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Parse and validate config from a TOML string
pub fn parse_config(contents: &str) -> Result<AnalyzerConfig> {
    let config = toml::from_str::<AnalyzerConfig>(contents)
        .map_err(|e| AnalysisError::Config(format!("Failed to parse config: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit file path
pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AnalysisError::Config(format!("Failed to read {}: {e}", path.display()))
    })?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "loaded analyzer config");
    Ok(config)
}

/// Look for `.docwright.toml` in `dir`; defaults when absent.
pub fn discover_config(dir: &Path) -> Result<AnalyzerConfig> {
    let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        load_config(&candidate)
    } else {
        Ok(AnalyzerConfig::default())
    }
}
