use crate::config::AnalyzerConfig;
use crate::core::Language;
use crate::errors::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docwright")]
#[command(about = "Heuristic readability, tone and code review analyzers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .docwright.toml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flesch reading ease and Gunning fog for a document
    Readability {
        /// Input file, or - for stdin
        input: PathBuf,
    },

    /// Frequent technical terms and inconsistent capitalisation
    Terminology {
        /// Input file, or - for stdin
        input: PathBuf,
    },

    /// Document sentiment, tone distribution and writing style
    Tone {
        /// Input file, or - for stdin
        input: PathBuf,
    },

    /// Line-addressed review comments for source code
    Review {
        /// Input file, or - for stdin
        input: PathBuf,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Complexity, patterns, style, security and suggestions for source code
    Context {
        /// Input file, or - for stdin
        input: PathBuf,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Language-dispatched quality metrics
    Quality {
        /// Input file, or - for stdin
        input: PathBuf,

        /// Source language (detected from the code when omitted)
        #[arg(short, long)]
        language: Option<Language>,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Pytest scaffolding for every function
    Tests {
        /// Input file, or - for stdin
        input: PathBuf,

        /// Source language (detected from the code when omitted)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Guess the language of a snippet
    Detect {
        /// Input file, or - for stdin
        input: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Functions above this cyclomatic complexity are reported
    #[arg(long)]
    pub complexity_threshold: Option<u32>,

    /// Trimmed lines longer than this are reported
    #[arg(long)]
    pub line_length: Option<usize>,
}

impl ThresholdArgs {
    /// Overrides are checked with the same rules as a config file.
    pub fn apply(&self, mut config: AnalyzerConfig) -> Result<AnalyzerConfig> {
        if let Some(threshold) = self.complexity_threshold {
            config = config.with_complexity_threshold(threshold);
        }
        if let Some(length) = self.line_length {
            config = config.with_line_length_threshold(length);
        }
        config.validate()?;
        Ok(config)
    }
}
