// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod common;
pub mod complexity;
pub mod config;
pub mod core;
pub mod errors;
pub mod review;
pub mod testgen;
pub mod text;

// Re-export commonly used types
pub use crate::analysis::{
    calculate_readability, DocumentAnalyzer, ReadabilityReport, SearchBackend, SimilarityProber,
    SimilarityReport, TerminologyChecker, TerminologyReport, ToneAnalyzer, ToneReport,
};
pub use crate::analyzers::{analyze_code_quality, detect_language, LanguageAnalyzer, QualityReport};
pub use crate::config::AnalyzerConfig;
pub use crate::core::{
    CommentType, ComplexityRecord, Language, ReviewComment, Severity, SuggestionBundle,
};
pub use crate::errors::{AnalysisError, ErrorReport, Result};
pub use crate::review::{CodeReviewer, ContextAnalysis, Formatter, PythonFormatter, RuleSet};
pub use crate::testgen::{generate_test_cases, TestCase};
pub use crate::text::{SentimentScorer, TextStructure};
