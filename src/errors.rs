//! Shared error types for the analyzers
//!
//! Every public entry point returns [`Result`]. Failures are data: callers
//! inspect the variant (or the rendered [`ErrorReport`]) instead of catching
//! panics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for analysis operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Input has no sentences or words where a ratio is required
    #[error("Input degenerate: {0}")]
    InputDegenerate(String),

    /// Source could not be parsed by the syntax-tree capability
    #[error("Parse error at line {line}: {message}")]
    ParseFailure { line: usize, message: String },

    /// An injected capability (tagger, sentiment, formatter, search) failed
    #[error("Capability unavailable ({capability}): {message}")]
    CapabilityUnavailable {
        capability: &'static str,
        message: String,
    },

    /// Deep analysis requested for a language without grammar support
    #[error("Language not supported for {operation}: {language}")]
    UnsupportedLanguage {
        language: String,
        operation: &'static str,
    },

    /// Input exceeded a configured size or nesting guard
    #[error("Resource limit exceeded: {0}")]
    ResourceLimit(String),

    /// Invalid analyzer configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::InputDegenerate(message.into())
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            line,
            message: message.into(),
        }
    }

    pub fn capability(capability: &'static str, message: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            capability,
            message: message.into(),
        }
    }

    pub fn unsupported(language: impl Into<String>, operation: &'static str) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
            operation,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// JSON shape of a failed analysis: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&AnalysisError> for ErrorReport {
    fn from(err: &AnalysisError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Render a result as the success payload or an `{"error": ...}` object.
pub fn to_json_value<T: Serialize>(result: &Result<T>) -> serde_json::Value {
    let rendered = match result {
        Ok(value) => serde_json::to_value(value),
        Err(err) => serde_json::to_value(ErrorReport::from(err)),
    };
    rendered.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }))
}
